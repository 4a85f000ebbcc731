//! CORS gate.
//!
//! Decides whether a browser origin may read our responses. Denied origins are
//! not rejected: the response simply lacks `Access-Control-Allow-Origin`, and
//! the browser enforces the block. Requests without an `Origin` header
//! (server-to-server) pass untouched.

use axum::http::{header, request::Parts, HeaderValue, Method};
use std::collections::BTreeSet;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

const ANY_ORIGIN: &str = "*";

/// Origin allow-list.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allow_any: bool,
    origins: Arc<BTreeSet<String>>,
}

impl CorsPolicy {
    pub fn from_config(config: &CorsConfig) -> Self {
        let origins: BTreeSet<String> = config
            .allowed_origins
            .iter()
            .map(|o| normalize(o).to_string())
            .filter(|o| !o.is_empty())
            .collect();
        Self {
            allow_any: origins.contains(ANY_ORIGIN),
            origins: Arc::new(origins),
        }
    }

    /// `None` means the request carried no `Origin` header.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(_) if self.allow_any => true,
            Some(origin) => self.origins.contains(normalize(origin)),
        }
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.origins.iter().cloned().collect()
    }

    /// tower-http layer applying this policy to actual and preflight requests.
    pub fn layer(&self) -> CorsLayer {
        let policy = self.clone();
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _parts: &Parts| {
                    let allowed = origin
                        .to_str()
                        .map(|o| policy.is_allowed(Some(o)))
                        .unwrap_or(false);
                    if !allowed {
                        tracing::debug!(origin = ?origin, "CORS origin not allowed");
                    }
                    allowed
                },
            ))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}

fn normalize(origin: &str) -> &str {
    origin.trim().trim_end_matches('/')
}
