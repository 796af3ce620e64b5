//! HTTP server.
//!
//! # Responsibilities
//! - Route every method on every path into the mirror handler
//! - Apply the middleware stack (request timeout, trace spans)
//! - Serve until shutdown, then drain gracefully
//!
//! # Data Flow
//! 1. `main` binds the listener and hands it here together with a
//!    shutdown receiver
//! 2. The router sends each request to `inspect::mirror_request`
//! 3. On shutdown the serve loop stops accepting and drains in-flight
//!    requests
//!
//! # Design Decisions
//! - No route table: the wildcard route plus the bare `/` route cover
//!   the entire path space, which is the whole point of a mirror
//! - State is the immutable configuration plus the stdout echo handle;
//!   request-scoped data never enters shared state

use std::sync::Arc;
use std::time::Duration;

use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::MirrorConfig;
use crate::inspect::{mirror_request, AppState};
use crate::lifecycle::shutdown::wait as wait_for_shutdown;
use crate::observability::ConsoleEcho;

/// Per-request deadline. Generous, since a request costs one body read
/// and one serialization.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The mirror's HTTP front end.
pub struct MirrorServer {
    router: Router,
}

impl MirrorServer {
    /// Create a server wired to the given configuration.
    pub fn new(config: MirrorConfig) -> Self {
        let echo = ConsoleEcho::new(config.echo_stdout);
        let state = AppState {
            config: Arc::new(config),
            echo,
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The wildcard route does not match the bare root, so `/` gets its
    /// own entry pointing at the same handler.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(mirror_request))
            .route("/", any(mirror_request))
            .with_state(state)
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
