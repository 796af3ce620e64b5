//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → inspect::mirror_request (facet extraction, report)
//!     → JSON response to client
//! ```

pub mod server;

pub use server::MirrorServer;
