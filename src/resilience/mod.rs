//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Upstream call:
//!     → timeouts.rs (hard deadline per attempt)
//!     → On transient failure: retries.rs (retry after backoff.rs delay)
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every attempt has a deadline
//! - Only transport failures are retried, never received responses
//! - Linear delay between attempts, no jitter

pub mod backoff;
pub mod retries;
pub mod timeouts;

pub use retries::{retry, RetryPolicy, Retryable};
pub use timeouts::DeadlineExceeded;
