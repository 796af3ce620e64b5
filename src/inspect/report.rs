//! The per-request report types.
//!
//! A [`RequestReport`] is the result object assembled for one request and
//! serialized as the response body. Every field type here serializes
//! infallibly, which makes response serialization total by construction.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Ordered header multimap: one entry per header name in arrival order,
/// with every value for that name in wire order.
pub type HeaderMultimap = IndexMap<String, Vec<String>>;

/// One cookie from the Cookie header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookiePair {
    pub name: String,
    pub value: String,
}

/// Basic-Auth credentials as presented by the request.
///
/// `ok` is `false` (with empty strings) when the Authorization header is
/// missing or does not carry a decodable Basic credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct BasicAuthRecord {
    pub usr: String,
    pub pswd: String,
    pub ok: bool,
}

impl BasicAuthRecord {
    /// Record for a request that carried decodable credentials.
    pub fn present(usr: String, pswd: String) -> Self {
        Self {
            usr,
            pswd,
            ok: true,
        }
    }

    /// Record for a request without usable credentials.
    pub fn absent() -> Self {
        Self::default()
    }
}

/// The report assembled for one request.
///
/// Allocated fresh inside each handler invocation and dropped once the
/// response is written; never stored in shared state. A `None` field means
/// the facet's capture flag is off and its key is absent from the JSON
/// object, so the serialized key set always equals the set of enabled
/// flags.
#[derive(Debug, Default, Serialize)]
pub struct RequestReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HeaderMultimap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<CookiePair>>,

    /// `Some(Value::Null)` when capture is on but the body failed to
    /// decode, so the key still serializes as `"body": null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,

    #[serde(rename = "basicAuth", skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuthRecord>,
}
