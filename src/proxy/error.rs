//! Errors a single order query can end in.

use serde_json::Value;
use thiserror::Error;

use crate::upstream::TransportError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProxyError {
    /// The request body is larger than `security.max_body_size`.
    #[error("request body is too large")]
    PayloadTooLarge,

    /// A required field is missing from the request body.
    #[error("startDate, endDate and userId are required")]
    Validation,

    /// The upstream credential was not configured at startup.
    #[error("upstream credential is not configured")]
    MissingCredential,

    /// No response was received from upstream, after retries.
    #[error("upstream request failed")]
    Transport(#[source] TransportError),

    /// Upstream answered with a body that is not JSON.
    #[error("upstream returned a non-JSON body")]
    UpstreamProtocol { status: u16, raw: String },

    /// Upstream answered with a JSON error.
    #[error("upstream returned an error")]
    UpstreamApplication { status: u16, body: Value },

    /// Anything unexpected while handling the request.
    #[error("internal error")]
    Internal(String),
}

impl ProxyError {
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::Validation => 400,
            ProxyError::PayloadTooLarge => 413,
            ProxyError::MissingCredential | ProxyError::Internal(_) => 500,
            ProxyError::UpstreamProtocol { .. } | ProxyError::UpstreamApplication { .. } => 502,
            ProxyError::Transport(_) => 504,
        }
    }
}
