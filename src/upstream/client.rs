//! Upstream client: one logical call with per-attempt deadline and bounded
//! linear retry.

use std::sync::Arc;

use crate::observability::metrics;
use crate::resilience::timeouts::with_deadline;
use crate::resilience::{retry, RetryPolicy};
use crate::upstream::error::TransportError;
use crate::upstream::transport::UpstreamTransport;
use crate::upstream::types::{OutboundRequest, RawResponse, UpstreamOutcome};

#[derive(Clone)]
pub struct UpstreamClient {
    transport: Arc<dyn UpstreamTransport>,
    policy: RetryPolicy,
}

impl UpstreamClient {
    pub fn new(transport: Arc<dyn UpstreamTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Perform the call. Transport failures are retried per the policy; any
    /// received response ends the loop and is classified as-is.
    pub async fn call(&self, request: &OutboundRequest) -> UpstreamOutcome {
        match self.send_with_retries(request).await {
            Ok(response) => {
                tracing::debug!(
                    status = response.status,
                    bytes = response.body.len(),
                    "Upstream responded"
                );
                UpstreamOutcome::from_response(response)
            }
            Err(e) => UpstreamOutcome::TransportFailure(e),
        }
    }

    async fn send_with_retries(
        &self,
        request: &OutboundRequest,
    ) -> Result<RawResponse, TransportError> {
        let deadline = self.policy.attempt_timeout;
        retry(&self.policy, |attempt| async move {
            tracing::debug!(attempt, url = %request.url, "Sending upstream request");
            let result = with_deadline(deadline, self.transport.send(request)).await;
            match &result {
                Ok(_) => metrics::record_upstream_attempt("response"),
                Err(e) => metrics::record_upstream_attempt(e.metric_label()),
            }
            result
        })
        .await
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("policy", &self.policy)
            .finish()
    }
}
