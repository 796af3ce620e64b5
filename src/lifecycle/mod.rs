//! Process lifecycle.
//!
//! # Responsibilities
//! - Graceful shutdown on Ctrl+C or programmatic trigger

pub mod shutdown;

pub use shutdown::Shutdown;
