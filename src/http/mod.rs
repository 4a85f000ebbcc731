//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (rid, metrics; TraceLayer span carrying the rid)
//!     → security::cors (allow-list gate)
//!     → handlers.rs (dispatch to the order proxy)
//!     → response.rs (JSON payloads, error mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};
