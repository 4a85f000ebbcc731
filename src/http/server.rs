//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the shared cache, upstream client and order proxy from config
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing span, CORS, body limit)
//! - Serve on a listener until shutdown is signalled

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::cache::ResponseCache;
use crate::config::ProxyConfig;
use crate::http::handlers;
use crate::http::request::{request_context, request_span};
use crate::proxy::OrdersProxy;
use crate::resilience::RetryPolicy;
use crate::security::CorsPolicy;
use crate::upstream::{Credential, ReqwestTransport, UpstreamClient, UpstreamTransport};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<OrdersProxy>,
    pub service_name: Arc<str>,
    pub cors: CorsPolicy,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid upstream URL: {0}")]
    UpstreamUrl(#[from] url::ParseError),
}

/// HTTP server for the order proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a server that talks to the upstream over reqwest.
    pub fn new(config: ProxyConfig, credential: Option<Credential>) -> Result<Self, ServerError> {
        let transport = ReqwestTransport::new(std::time::Duration::from_secs(
            config.upstream.connect_timeout_secs,
        ))?;
        Self::with_transport(config, credential, Arc::new(transport))
    }

    /// Create a server over an arbitrary transport.
    pub fn with_transport(
        config: ProxyConfig,
        credential: Option<Credential>,
        transport: Arc<dyn UpstreamTransport>,
    ) -> Result<Self, ServerError> {
        let upstream_url = config.upstream.url.parse()?;
        let client = UpstreamClient::new(transport, RetryPolicy::from(&config.retries));
        let cache = ResponseCache::new(config.cache.ttl());
        let proxy = OrdersProxy::new(
            cache,
            client,
            upstream_url,
            credential,
            config.upstream.auth_scheme,
        );

        let state = AppState {
            proxy: Arc::new(proxy),
            service_name: Arc::from(config.service.name.as_str()),
            cors: CorsPolicy::from_config(&config.cors),
        };

        let router = Self::build_router(&config, state.clone());
        Ok(Self {
            router,
            config,
            state,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        let cors = state.cors.layer();
        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/routes", get(handlers::routes))
            .route("/tmsorders", post(handlers::tmsorders))
            .route("/tmsorders/week", post(handlers::tmsorders))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(cors)
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(middleware::from_fn(request_context))
    }

    /// The configured router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on the given listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            credential = self.state.proxy.has_credential(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
