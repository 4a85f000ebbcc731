//! Per-attempt deadlines.
//!
//! The wrapped future is dropped when the deadline passes, which cancels any
//! in-flight I/O it owns.

use std::future::Future;
use std::time::Duration;

/// Marker error for an attempt that ran past its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineExceeded(pub Duration);

/// Run `fut` with a hard wall-clock deadline.
pub async fn with_deadline<F, T, E>(deadline: Duration, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<DeadlineExceeded>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(DeadlineExceeded(deadline).into()),
    }
}
