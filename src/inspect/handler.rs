//! The mirror handler.
//!
//! # Responsibilities
//! - Accept any inbound request, regardless of method or path
//! - Build a fresh report from the facets the configuration enables
//! - Answer 200 with the serialized report, and echo it to stdout when
//!   configured to
//!
//! # Design Decisions
//! - The report lives on the handler's stack. Nothing request-scoped is
//!   stored in shared state, so concurrent requests cannot observe each
//!   other's facets.
//! - A body that cannot be read or decoded downgrades to `null` inside
//!   the report instead of failing the request.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::config::MirrorConfig;
use crate::inspect::facets;
use crate::inspect::report::RequestReport;
use crate::observability::ConsoleEcho;

/// Upper bound on how many body bytes a single report will buffer.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Shared state handed to every request.
///
/// The configuration is read-only after startup; cloning the state is a
/// pair of cheap handle copies.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MirrorConfig>,
    pub echo: ConsoleEcho,
}

/// Turn one request into one report.
pub async fn mirror_request(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let capture = &state.config.capture;

    let mut report = RequestReport::default();
    if capture.headers {
        report.headers = Some(facets::header_multimap(&parts.headers));
    }
    if capture.uri {
        report.uri = Some(facets::raw_target(&parts.uri));
    }
    if capture.cookies {
        report.cookies = Some(facets::cookie_pairs(&parts.headers));
    }
    if capture.body {
        report.body = Some(read_json_body(body, &parts.uri).await);
    }
    if capture.basic_auth {
        report.basic_auth = Some(facets::basic_auth_record(&parts.headers));
    }

    tracing::info!(method = %parts.method, uri = %parts.uri, "Mirrored request");

    match serde_json::to_string(&report) {
        Ok(serialized) => {
            state.echo.write_line(&serialized);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                serialized,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to serialize report");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Collect and decode the body facet.
///
/// An unreadable or non-JSON body yields `null`; the empty body lands
/// here too, since zero bytes decode as EOF.
async fn read_json_body(body: Body, uri: &Uri) -> Value {
    let bytes = match to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!(error = %error, uri = %uri, "Failed to read request body");
            return Value::Null;
        }
    };
    match facets::decode_body(&bytes) {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(error = %error, uri = %uri, "Failed to decode request body");
            Value::Null
        }
    }
}
