//! Order query proxying.
//!
//! # Data Flow
//! ```text
//! request body
//!     → query.rs (validate, derive cache key)
//!     → handler.rs (credential, cache probe, upstream call, classification)
//!     → OrdersReply or ProxyError
//! ```

pub mod error;
pub mod handler;
pub mod query;

pub use error::ProxyError;
pub use handler::{OrdersProxy, OrdersReply};
pub use query::{parse_body, OrdersQuery};
