//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! OutboundRequest
//!     → client.rs (deadline + retry loop)
//!     → transport.rs (one HTTP exchange via reqwest)
//!     → types.rs (classify into UpstreamOutcome)
//! ```

pub mod client;
pub mod credential;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use client::UpstreamClient;
pub use credential::Credential;
pub use error::TransportError;
pub use transport::{ReqwestTransport, UpstreamTransport};
pub use types::{OutboundRequest, RawResponse, UpstreamOutcome};
