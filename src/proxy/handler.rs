//! The order query handler: validate, probe cache, call upstream, classify.

use serde_json::Value;
use url::Url;

use crate::cache::ResponseCache;
use crate::config::AuthScheme;
use crate::proxy::error::ProxyError;
use crate::proxy::query::OrdersQuery;
use crate::upstream::{Credential, OutboundRequest, UpstreamClient, UpstreamOutcome};

/// Successful reply payload.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersReply {
    pub cached: bool,
    pub data: Value,
}

/// Forwards order queries to the upstream API through the shared cache.
#[derive(Debug, Clone)]
pub struct OrdersProxy {
    cache: ResponseCache,
    client: UpstreamClient,
    upstream_url: Url,
    credential: Option<Credential>,
    auth_scheme: AuthScheme,
}

impl OrdersProxy {
    pub fn new(
        cache: ResponseCache,
        client: UpstreamClient,
        upstream_url: Url,
        credential: Option<Credential>,
        auth_scheme: AuthScheme,
    ) -> Self {
        Self {
            cache,
            client,
            upstream_url,
            credential,
            auth_scheme,
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Handle one query body.
    ///
    /// Concurrent identical queries each call upstream on a miss; there is no
    /// in-flight deduplication.
    pub async fn handle(&self, body: &Value) -> Result<OrdersReply, ProxyError> {
        let query = OrdersQuery::from_body(body)?;

        let Some(credential) = &self.credential else {
            tracing::error!("Upstream credential missing; refusing to forward");
            return Err(ProxyError::MissingCredential);
        };

        let key = query.cache_key();
        if let Some(data) = self.cache.get(&key) {
            tracing::debug!("Cache hit");
            return Ok(OrdersReply { cached: true, data });
        }

        let request = OutboundRequest {
            url: self.upstream_url.clone(),
            authorization: credential.authorization(self.auth_scheme),
            body: query.upstream_body(),
        };

        match self.client.call(&request).await {
            UpstreamOutcome::Success(data) => {
                self.cache.put(key, data.clone());
                Ok(OrdersReply {
                    cached: false,
                    data,
                })
            }
            UpstreamOutcome::TransportFailure(e) => {
                tracing::error!(error = %e, "Upstream unreachable");
                Err(ProxyError::Transport(e))
            }
            UpstreamOutcome::NonJsonBody { raw, status } => {
                tracing::warn!(status, "Upstream returned a non-JSON body");
                Err(ProxyError::UpstreamProtocol { status, raw })
            }
            UpstreamOutcome::UpstreamError { status, body } => {
                tracing::warn!(status, "Upstream returned an error status");
                Err(ProxyError::UpstreamApplication { status, body })
            }
        }
    }
}
