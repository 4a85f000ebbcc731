//! Transport failure taxonomy for upstream calls.

use thiserror::Error;

use crate::resilience::{DeadlineExceeded, Retryable};

/// A failure to complete the HTTP exchange at all.
///
/// A received response of any status is not a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The attempt ran past its deadline and was cancelled.
    #[error("upstream did not respond within {0:?}")]
    Timeout(std::time::Duration),

    /// Connection could not be established (refused, DNS, connect timeout).
    #[error("could not connect to upstream: {0}")]
    Connect(String),

    /// The exchange broke before a response arrived (reset, closed, ...).
    #[error("network error talking to upstream: {0}")]
    Network(String),

    /// Response headers arrived but the body could not be read in full.
    /// A response was received, so this is never retried.
    #[error("upstream response body could not be read: {0}")]
    Body(String),

    /// The request could not be built or sent for a non-transient reason.
    #[error("upstream request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Stable code included in error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            TransportError::Timeout(_) => "UPSTREAM_TIMEOUT",
            TransportError::Connect(_) => "UPSTREAM_CONNECT",
            TransportError::Network(_) => "UPSTREAM_NETWORK",
            TransportError::Body(_) => "UPSTREAM_BODY",
            TransportError::Request(_) => "UPSTREAM_REQUEST",
        }
    }

    /// Label for the upstream attempt counter.
    pub fn metric_label(&self) -> &'static str {
        match self {
            TransportError::Timeout(_) => "timeout",
            TransportError::Connect(_) => "connect",
            TransportError::Network(_) => "network",
            TransportError::Body(_) => "body",
            TransportError::Request(_) => "request",
        }
    }
}

impl Retryable for TransportError {
    fn is_retryable(&self) -> bool {
        !matches!(self, TransportError::Request(_) | TransportError::Body(_))
    }
}

impl From<DeadlineExceeded> for TransportError {
    fn from(e: DeadlineExceeded) -> Self {
        TransportError::Timeout(e.0)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let message = error_chain(&e);
        if e.is_connect() {
            TransportError::Connect(message)
        } else if e.is_builder() || e.is_redirect() || e.is_decode() {
            TransportError::Request(message)
        } else {
            TransportError::Network(message)
        }
    }
}

impl TransportError {
    /// Map a failure while reading a received response body.
    pub fn body(e: reqwest::Error) -> Self {
        TransportError::Body(error_chain(&e))
    }
}

/// Render an error followed by its source chain.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
