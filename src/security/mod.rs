//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (origin allow-list, preflight handling)
//!     → body limit (axum `DefaultBodyLimit`, checked when the handler reads the body)
//!     → Pass to handlers
//! ```
//!
//! # Design Decisions
//! - The calling frontend is not authenticated
//! - CORS denial degrades to missing headers, never a server-side rejection

pub mod cors;

pub use cors::CorsPolicy;
