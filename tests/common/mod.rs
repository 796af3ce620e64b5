//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use request_mirror::config::{CaptureConfig, MirrorConfig};
use request_mirror::http::MirrorServer;
use request_mirror::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Start a mirror on an ephemeral port, returning its address and the
/// shutdown handle that stops it.
pub async fn spawn_mirror(config: MirrorConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = MirrorServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for the serve loop to start polling
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// Build a config that captures exactly the given facets.
pub fn config_capturing(capture: CaptureConfig) -> MirrorConfig {
    MirrorConfig {
        capture,
        ..MirrorConfig::default()
    }
}

/// Build a config with every capture flag off.
pub fn config_capturing_nothing() -> MirrorConfig {
    config_capturing(CaptureConfig {
        body: false,
        ..CaptureConfig::default()
    })
}

/// A client that neither pools connections nor picks up proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
