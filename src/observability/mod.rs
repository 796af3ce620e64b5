//! Observability.
//!
//! # Responsibilities
//! - Structured logging via tracing
//! - Optional stdout echo of every serialized report

pub mod echo;
pub mod logging;

pub use echo::ConsoleEcho;
pub use logging::init_tracing;
