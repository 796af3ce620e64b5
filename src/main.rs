//! Request Mirror (v1)
//!
//! An HTTP introspection service built with Tokio and Axum. It accepts
//! any request on any path and answers with a JSON report of the
//! request's own facets.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────┐
//!                        │               REQUEST MIRROR              │
//!                        │                                           │
//!     Client Request     │  ┌─────────┐    ┌─────────┐   ┌────────┐  │
//!     ───────────────────┼─▶│  http   │───▶│ inspect │──▶│ report │  │
//!                        │  │ server  │    │ facets  │   │  JSON  │  │
//!     Client Response    │  └─────────┘    └─────────┘   └───┬────┘  │
//!     ◀──────────────────┼────────────────────────────────────┘      │
//!                        │                                           │
//!                        │  ┌─────────────────────────────────────┐  │
//!                        │  │        Cross-Cutting Concerns       │  │
//!                        │  │  ┌────────┐ ┌──────────┐ ┌───────┐  │  │
//!                        │  │  │ config │ │observa-  │ │life-  │  │  │
//!                        │  │  │  (CLI) │ │ bility   │ │cycle  │  │  │
//!                        │  │  └────────┘ └──────────┘ └───────┘  │  │
//!                        │  └─────────────────────────────────────┘  │
//!                        └───────────────────────────────────────────┘
//! ```

use clap::{CommandFactory, Parser};
use tokio::net::TcpListener;

use request_mirror::config::{validate_config, Cli};
use request_mirror::observability;
use request_mirror::{MirrorConfig, MirrorServer, Shutdown};

/// Exit code for a rejected configuration, distinct from runtime
/// failures.
const EXIT_BAD_CONFIG: i32 = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = MirrorConfig::from(cli);

    // Reject bad configuration before anything else starts; usage goes
    // to stderr since nothing useful happened yet.
    if let Err(error) = validate_config(&config) {
        eprintln!("Error: {error}");
        eprintln!();
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(EXIT_BAD_CONFIG);
    }

    observability::init_tracing(config.quiet);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "request-mirror starting");
    tracing::info!(
        address = %config.listen.address(),
        headers = config.capture.headers,
        uri = config.capture.uri,
        cookies = config.capture.cookies,
        body = config.capture.body,
        basic_auth = config.capture.basic_auth,
        echo_stdout = config.echo_stdout,
        "Configuration loaded"
    );

    let address = config.listen.address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(error = %error, address = %address, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let server = MirrorServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
