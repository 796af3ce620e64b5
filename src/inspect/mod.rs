//! Request inspection.
//!
//! # Responsibilities
//! - Define the report document returned for every request
//! - Extract individual facets (headers, uri, cookies, body, basic auth)
//! - Assemble reports inside the request handler
//!
//! # Data Flow
//! 1. The router hands every request to [`handler::mirror_request`]
//! 2. The handler consults the capture flags and calls one
//!    [`facets`] function per enabled facet
//! 3. The populated [`report::RequestReport`] serializes to the JSON
//!    response body

pub mod facets;
pub mod handler;
pub mod report;

pub use handler::{mirror_request, AppState, BODY_LIMIT};
pub use report::{BasicAuthRecord, CookiePair, HeaderMultimap, RequestReport};
