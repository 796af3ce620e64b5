//! Request Mirror Library

pub mod config;
pub mod http;
pub mod inspect;
pub mod lifecycle;
pub mod observability;

pub use config::MirrorConfig;
pub use http::MirrorServer;
pub use lifecycle::Shutdown;
