//! Request correlation.
//!
//! # Responsibilities
//! - Generate a fresh request ID (rid) for every inbound request
//! - Expose it to handlers as an extension and to clients as `x-request-id`
//! - Build the per-request tracing span (via tower-http `TraceLayer`) and
//!   record request metrics
//!
//! # Design Decisions
//! - Client-supplied `x-request-id` values are ignored; the rid is always ours
//! - Format is `<unix-millis>-<random hex>`

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::Span;

use crate::observability::metrics;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Per-request correlation identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Self(format!("{}-{:x}", millis, fastrand::u64(..)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for RequestId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Span for one request, used as the `TraceLayer` span maker. Runs inside
/// [`request_context`], so the rid extension is already present.
pub fn request_span(request: &Request<Body>) -> Span {
    let rid = request
        .extensions()
        .get::<RequestId>()
        .map(RequestId::as_str)
        .unwrap_or("-");
    tracing::info_span!(
        "request",
        rid = %rid,
        method = %request.method(),
        path = %request.uri().path()
    )
}

/// Middleware assigning the rid and recording request metrics.
pub async fn request_context(mut request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let rid = RequestId::generate();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    request.extensions_mut().insert(rid.clone());
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(rid.as_str()) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    metrics::record_request(&route, response.status().as_u16(), start);
    response
}
