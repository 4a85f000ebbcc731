//! Configuration validation.
//!
//! Serde handles syntax; this module checks that values make sense before the
//! config is accepted. Every problem is reported, not just the first.

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not an ip:port socket address")]
    BindAddress(String),

    #[error("upstream.url '{0}' is not an absolute http(s) URL")]
    UpstreamUrl(String),

    #[error("upstream.credential_env must not be empty")]
    CredentialEnv,

    #[error("retries.attempt_timeout_secs must be greater than zero")]
    AttemptTimeout,

    #[error("cache.ttl_secs must be greater than zero")]
    CacheTtl,

    #[error("cors.allowed_origins contains an empty entry")]
    EmptyOrigin,

    #[error("security.max_body_size must be greater than zero")]
    MaxBodySize,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::UpstreamUrl(config.upstream.url.clone())),
    }

    if config.upstream.credential_env.trim().is_empty() {
        errors.push(ValidationError::CredentialEnv);
    }

    if config.retries.attempt_timeout_secs == 0 {
        errors.push(ValidationError::AttemptTimeout);
    }

    if config.cache.ttl_secs == 0 {
        errors.push(ValidationError::CacheTtl);
    }

    if config.cors.allowed_origins.iter().any(|o| o.trim().is_empty()) {
        errors.push(ValidationError::EmptyOrigin);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::MaxBodySize);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
