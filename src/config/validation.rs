//! Configuration validation.
//!
//! Semantic checks on a resolved [`MirrorConfig`]. Validation is a pure
//! function and runs exactly once, in `main`, before any socket is bound.

use thiserror::Error;

use crate::config::schema::MirrorConfig;

/// Error produced when the resolved configuration is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No listen host was supplied.
    #[error("a listen host is required (--host)")]
    MissingHost,
}

/// Validate a resolved configuration.
pub fn validate_config(config: &MirrorConfig) -> Result<(), ConfigError> {
    if config.listen.host.is_empty() {
        return Err(ConfigError::MissingHost);
    }
    Ok(())
}
