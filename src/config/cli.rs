//! Command-line surface.
//!
//! One flag per configuration option. Parsing is pure: `Cli` maps into a
//! [`MirrorConfig`] without touching the process environment, so tests can
//! drive it with `try_parse_from`. The required-host rule is deliberately
//! NOT enforced by clap; `main` validates it and exits with the service's
//! own usage text and exit code (see `validation.rs`).

use clap::Parser;

use crate::config::schema::{CaptureConfig, ListenConfig, MirrorConfig};

/// Mirror inbound HTTP requests back to their caller as a JSON report.
#[derive(Debug, Parser)]
#[command(name = "request-mirror", version)]
pub struct Cli {
    /// Host to listen on [required]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Capture the request headers
    #[arg(long)]
    pub headers: bool,

    /// Capture the raw request target (path + query)
    #[arg(long)]
    pub uri: bool,

    /// Capture the cookies sent with the request
    #[arg(long)]
    pub cookies: bool,

    /// Capture the request body, decoded as JSON (disable with --body=false)
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub body: bool,

    /// Capture the Basic-Auth credentials
    #[arg(long, alias = "basicAuth")]
    pub basic_auth: bool,

    /// Suppress startup and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Print each mirrored report to the terminal
    #[arg(long)]
    pub std: bool,
}

impl From<Cli> for MirrorConfig {
    fn from(cli: Cli) -> Self {
        Self {
            listen: ListenConfig {
                host: cli.host.unwrap_or_default(),
                port: cli.port,
            },
            capture: CaptureConfig {
                headers: cli.headers,
                uri: cli.uri,
                cookies: cli.cookies,
                body: cli.body,
                basic_auth: cli.basic_auth,
            },
            echo_stdout: cli.std,
            quiet: cli.quiet,
        }
    }
}
