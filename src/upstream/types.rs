//! Request and outcome types exchanged with the upstream API.

use serde_json::Value;
use url::Url;

/// Characters of a non-JSON body kept in error payloads.
pub const RAW_PREVIEW_CHARS: usize = 800;

/// One POST to the upstream endpoint. Built per call, never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub url: Url,
    /// Full `Authorization` header value.
    pub authorization: String,
    /// JSON body `{startDate, endDate, userId}`.
    pub body: Value,
}

/// Status and body text of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of one logical upstream call, after retries.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamOutcome {
    /// No response was received on any attempt.
    TransportFailure(crate::upstream::TransportError),
    /// A response arrived but its body is not JSON.
    NonJsonBody { raw: String, status: u16 },
    /// A JSON response with a non-2xx status.
    UpstreamError { status: u16, body: Value },
    /// A JSON response with a 2xx status.
    Success(Value),
}

impl UpstreamOutcome {
    /// Classify a received response. An empty body parses as `null`.
    pub fn from_response(response: RawResponse) -> Self {
        let parsed = if response.body.is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_str::<Value>(&response.body)
        };

        match parsed {
            Err(_) => UpstreamOutcome::NonJsonBody {
                raw: preview(&response.body, RAW_PREVIEW_CHARS),
                status: response.status,
            },
            Ok(body) if response.is_success() => UpstreamOutcome::Success(body),
            Ok(body) => UpstreamOutcome::UpstreamError {
                status: response.status,
                body,
            },
        }
    }
}

/// First `limit` characters of `text`, respecting UTF-8 boundaries.
pub fn preview(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
