//! Facet extraction.
//!
//! Each function turns one slice of an inbound request into its report
//! representation. All of them are pure over the request parts they
//! receive; the handler decides which ones run (capture flags) and owns
//! the only side-effecting step (reading the body).

use axum::http::{header, HeaderMap, Uri};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use cookie::Cookie;
use serde_json::Value;

use crate::inspect::report::{BasicAuthRecord, CookiePair, HeaderMultimap};

const BASIC_SCHEME: &str = "Basic ";

/// Collect the full header multimap, arrival order preserved.
///
/// Names come through lowercased by the HTTP layer. Every value of a
/// repeated name is kept, in wire order; values that are not UTF-8 are
/// replaced lossily rather than dropped, so the name still shows up.
pub fn header_multimap(headers: &HeaderMap) -> HeaderMultimap {
    let mut map = HeaderMultimap::new();
    for (name, value) in headers {
        map.entry(name.as_str().to_owned())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    map
}

/// The raw request target: path plus query, exactly as presented on the
/// wire, not re-normalized.
pub fn raw_target(uri: &Uri) -> String {
    uri.to_string()
}

/// Parse the ordered cookie list from the Cookie header(s).
///
/// An absent header yields an empty list. Fragments that fail to parse
/// are skipped; the rest of the list still comes through.
pub fn cookie_pairs(headers: &HeaderMap) -> Vec<CookiePair> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(|parsed| parsed.ok())
        .map(|cookie| CookiePair {
            name: cookie.name().to_owned(),
            value: cookie.value().to_owned(),
        })
        .collect()
}

/// Extract Basic-Auth credentials per RFC 7617.
///
/// Any failure to decode the credential (missing header, different
/// scheme, bad base64, non-UTF-8 payload, no `:` separator) yields the
/// absent record, never an error. An empty username is valid.
pub fn basic_auth_record(headers: &HeaderMap) -> BasicAuthRecord {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_basic)
        .unwrap_or_else(BasicAuthRecord::absent)
}

fn parse_basic(value: &str) -> Option<BasicAuthRecord> {
    let scheme = value.as_bytes().get(..BASIC_SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME.as_bytes()) {
        return None;
    }
    let encoded = value.get(BASIC_SCHEME.len()..)?;
    let decoded = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (usr, pswd) = decoded.split_once(':')?;
    Some(BasicAuthRecord::present(usr.to_owned(), pswd.to_owned()))
}

/// Decode collected body bytes as a schema-free JSON value.
pub fn decode_body(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(bytes)
}
