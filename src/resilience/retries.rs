//! Retry logic.
//!
//! # Responsibilities
//! - Retry only errors classified as transient
//! - Wait a linearly increasing delay between attempts
//!
//! # Design Decisions
//! - A received HTTP response is never an error here, whatever its status
//! - No retry budget or circuit breaker; the attempt count is the only bound

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::resilience::backoff::linear_backoff;

/// Errors that know whether another attempt could succeed.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

/// Attempt budget and pacing for one logical call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Deadline the caller applies to every attempt.
    pub attempt_timeout: Duration,
    /// Attempts allowed after the first.
    pub max_retries: u32,
    /// Base of the linear delay between attempts.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Total attempts including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before retry number `retry` (1-based).
    pub fn delay_before(&self, retry: u32) -> Duration {
        linear_backoff(retry, self.base_delay)
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            attempt_timeout: config.attempt_timeout(),
            max_retries: config.max_retries,
            base_delay: config.base_delay(),
        }
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// policy's attempts are used up. `op` receives the 1-based attempt number.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + Display,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts && e.is_retryable() => {
                let delay = policy.delay_before(attempt);
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay = ?delay,
                    error = %e,
                    "Retrying upstream call"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(attempt, max_attempts, error = %e, "Upstream call failed");
                return Err(e);
            }
        }
    }
}
