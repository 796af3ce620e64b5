//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line
//!     → cli.rs (clap parse)
//!     → schema.rs (MirrorConfig)
//!     → validation.rs (semantic checks: listen host present)
//!     → shared via Arc into every request handler
//! ```
//!
//! # Design Decisions
//! - Flags are resolved exactly once at startup; the config never mutates
//! - Capture flags default to off, except body
//! - Validation runs before any socket is bound

pub mod cli;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::{CaptureConfig, ListenConfig, MirrorConfig};
pub use validation::{validate_config, ConfigError};
