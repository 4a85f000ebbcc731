//! Startup orchestration.
//!
//! Load config → init logging → resolve credential → metrics → bind → serve.
//! Any error before the listener is bound is fatal. A missing credential is
//! not: the server starts and answers order queries with 500.

use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{self, ConfigError};
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};
use crate::upstream::Credential;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the proxy and block until it shuts down.
pub async fn run(config_path: Option<&Path>) -> Result<(), StartupError> {
    let config = config::load(config_path)?;
    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        auth_scheme = ?config.upstream.auth_scheme,
        attempt_timeout_secs = config.retries.attempt_timeout_secs,
        max_retries = config.retries.max_retries,
        cache_ttl_secs = config.cache.ttl_secs,
        "Configuration loaded"
    );

    let credential = Credential::from_env(&config.upstream.credential_env);
    if credential.is_none() {
        tracing::warn!(
            env = %config.upstream.credential_env,
            "Upstream credential not set; order queries will fail with 500"
        );
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let server = HttpServer::new(config, credential)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_requested().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await.map_err(StartupError::Serve)?;
    tracing::info!("Shutdown complete");
    Ok(())
}
