//! Configuration schema definitions.
//!
//! The complete configuration surface of the mirror service. Resolved once
//! from the command line at startup and treated as immutable afterwards;
//! every request handler reads it through a shared `Arc`.

use serde::{Deserialize, Serialize};

/// Root configuration for the mirror service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MirrorConfig {
    /// Listen address (host + port).
    pub listen: ListenConfig,

    /// Which facets of each request get captured into the report.
    pub capture: CaptureConfig,

    /// Mirror each serialized report to stdout, independent of the
    /// HTTP response.
    pub echo_stdout: bool,

    /// Suppress startup and informational logging. Error logging stays on.
    pub quiet: bool,
}

/// Listen address configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Host component (e.g. "127.0.0.1" or a hostname).
    pub host: String,

    /// Port component.
    pub port: u16,
}

impl ListenConfig {
    /// The joined `host:port` address handed to the TCP listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Capture flags: one per request facet.
///
/// A disabled flag means the corresponding key is absent from the report.
/// An enabled flag means the key is always present, even when the facet
/// itself is empty (no cookies, no auth header, body that failed to decode).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Capture the full header multimap.
    pub headers: bool,

    /// Capture the raw request target (path + query) as received.
    pub uri: bool,

    /// Capture the ordered cookie list from the Cookie header.
    pub cookies: bool,

    /// Capture the body, decoded as schema-free JSON.
    pub body: bool,

    /// Capture the Basic-Auth credential record.
    pub basic_auth: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            headers: false,
            uri: false,
            cookies: false,
            // Body capture is the one facet that is on by default.
            body: true,
            basic_auth: false,
        }
    }
}
