//! Scripted transport for unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

use crate::upstream::error::TransportError;
use crate::upstream::transport::UpstreamTransport;
use crate::upstream::types::{OutboundRequest, RawResponse};

#[derive(Debug, Clone)]
pub(crate) enum Step {
    Respond(u16, &'static str),
    /// Respond after sleeping.
    Delayed(Duration, u16, &'static str),
    Fail(TransportError),
    Hang,
}

/// Plays back steps in order; the last step repeats once the script runs out.
#[derive(Debug)]
pub(crate) struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    last: Step,
    calls: Mutex<Vec<(Instant, OutboundRequest)>>,
}

impl ScriptedTransport {
    pub(crate) fn always(step: Step) -> Self {
        Self::sequence(vec![step])
    }

    pub(crate) fn sequence(steps: Vec<Step>) -> Self {
        let last = steps.last().cloned().unwrap_or(Step::Hang);
        Self {
            steps: Mutex::new(steps.into()),
            last,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub(crate) fn requests(&self) -> Vec<OutboundRequest> {
        self.calls.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }
}

#[async_trait]
impl UpstreamTransport for ScriptedTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<RawResponse, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), request.clone()));
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.clone());

        match step {
            Step::Respond(status, body) => Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            Step::Delayed(delay, status, body) => {
                tokio::time::sleep(delay).await;
                Ok(RawResponse {
                    status,
                    body: body.to_string(),
                })
            }
            Step::Fail(e) => Err(e),
            Step::Hang => std::future::pending().await,
        }
    }
}
