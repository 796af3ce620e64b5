//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Honor quiet mode by raising the default level to `warn`
//!
//! # Design Decisions
//! - `RUST_LOG` always wins over the built-in directives, quiet or not
//! - Errors keep flowing in quiet mode; only informational logs go dark

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Call once, before the first log line. Quiet mode moves the default
/// filter from `info` to `warn`.
pub fn init_tracing(quiet: bool) {
    let default_directives = if quiet {
        "request_mirror=warn,tower_http=warn"
    } else {
        "request_mirror=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
