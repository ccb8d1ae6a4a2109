//! Normalized scan results.
//!
//! A [`ScanResult`] is the uniform shape produced by the client whether the
//! outcome came from the service or was synthesized locally. The payload is kept
//! as the permissive JSON mapping the service returned; types are enforced at the
//! accessor boundary through the table in [`fields`].
//!
//! Accessors are total. A missing key, a `null`, or a value of the wrong JSON
//! type all read as the field's documented default.

pub mod fields;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::QUOTA_EXCEEDED_MARKER;
use crate::error_handling::FailureKind;
use fields::FieldKind;

/// The last normalized response held by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScanResult(Map<String, Value>);

impl From<Map<String, Value>> for ScanResult {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl ScanResult {
    /// Creates the pristine, empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a locally synthesized failure:
    /// `{success: false, message, status_code: kind.status_code()}`.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("success".to_string(), Value::Bool(false));
        map.insert("message".to_string(), Value::String(message.into()));
        map.insert("status_code".to_string(), Value::from(kind.status_code()));
        Self(map)
    }

    /// The underlying mapping, exactly as stored.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the service reported an exhausted request quota inside a generic failure.
    pub fn is_quota_exceeded(&self) -> bool {
        !self.success() && self.message().contains(QUOTA_EXCEEDED_MARKER)
    }

    /// Reads a documented field, applying its default from the accessor table.
    ///
    /// Returns `None` only for names that are not in the table. The returned value
    /// always has the JSON type the table declares for the field.
    pub fn field(&self, name: &str) -> Option<Value> {
        let spec = fields::spec(name)?;
        let stored = self.0.get(name);

        let value = match spec.kind {
            FieldKind::Bool => Value::Bool(stored.is_some_and(is_truthy)),
            FieldKind::Str(default) => {
                Value::String(stored.and_then(Value::as_str).unwrap_or(default).to_string())
            }
            FieldKind::Int(default) => Value::from(stored.and_then(as_integer).unwrap_or(default)),
            FieldKind::Map => {
                Value::Object(stored.and_then(Value::as_object).cloned().unwrap_or_default())
            }
            FieldKind::StrList => Value::Array(
                stored
                    .and_then(Value::as_array)
                    .map(|items| items.iter().filter(|v| v.is_string()).cloned().collect())
                    .unwrap_or_default(),
            ),
        };
        Some(value)
    }

    fn bool_field(&self, name: &str) -> bool {
        matches!(self.field(name), Some(Value::Bool(true)))
    }

    fn str_field(&self, name: &str) -> String {
        match self.field(name) {
            Some(Value::String(s)) => s,
            _ => String::new(),
        }
    }

    fn int_field(&self, name: &str) -> i64 {
        self.field(name).and_then(|v| v.as_i64()).unwrap_or_default()
    }

    /// Whether the request to the service succeeded.
    pub fn success(&self) -> bool {
        self.bool_field("success")
    }

    /// Generic status message, either success or some form of error notice.
    pub fn message(&self) -> String {
        self.str_field("message")
    }

    /// HTTP status of the scanned URL, or the code of a synthesized failure.
    /// `0` if unreachable.
    pub fn status_code(&self) -> i64 {
        self.int_field("status_code")
    }

    /// Whether the domain is suspected of being unsafe due to phishing, malware,
    /// spamming, or abusive behavior. Read `unsafe` from the mapping.
    pub fn is_unsafe(&self) -> bool {
        self.bool_field("unsafe")
    }

    /// Domain of the final destination URL after all redirects; `""` if unavailable.
    pub fn domain(&self) -> String {
        self.str_field("domain")
    }

    /// IP address of the server hosting the domain; `""` if unavailable.
    pub fn ip_address(&self) -> String {
        self.str_field("ip_address")
    }

    /// Server banner of the domain's IP address (e.g. `nginx/1.16.0`); `"N/A"` if unavailable.
    pub fn server(&self) -> String {
        self.str_field("server")
    }

    /// MIME type of the URL's content; `"N/A"` if unavailable.
    pub fn content_type(&self) -> String {
        self.str_field("content_type")
    }

    /// Confidence level for malicious URL detection.
    ///
    /// Scores of 85 and above are high risk; 100 is confirmed malicious.
    /// [`DOES_NOT_EXIST`](crate::config::DOES_NOT_EXIST) if no score was reported.
    pub fn risk_score(&self) -> i64 {
        self.int_field("risk_score")
    }

    /// Total bytes to download the URL's content; `0` if unreachable.
    pub fn page_size(&self) -> i64 {
        self.int_field("page_size")
    }

    /// Estimated global popularity rank. `0` means unranked or low traffic;
    /// [`DOES_NOT_EXIST`](crate::config::DOES_NOT_EXIST) if unreachable.
    pub fn domain_rank(&self) -> i64 {
        self.int_field("domain_rank")
    }

    pub fn dns_valid(&self) -> bool {
        self.bool_field("dns_valid")
    }

    /// Whether the URL is suspected of being malicious or used for phishing or
    /// abuse. Use with [`risk_score`](Self::risk_score) as a confidence level.
    pub fn suspicious(&self) -> bool {
        self.bool_field("suspicious")
    }

    pub fn phishing(&self) -> bool {
        self.bool_field("phishing")
    }

    pub fn malware(&self) -> bool {
        self.bool_field("malware")
    }

    /// Whether the domain is parked with a for-sale notice.
    pub fn parking(&self) -> bool {
        self.bool_field("parking")
    }

    /// Whether the URL is associated with email spam or abusive email addresses.
    pub fn spamming(&self) -> bool {
        self.bool_field("spamming")
    }

    /// Whether the URL or domain hosts dating or adult content.
    pub fn adult(&self) -> bool {
        self.bool_field("adult")
    }

    /// Website classification (e.g. "Video Streaming", "Phishing"); `"N/A"` if unknown.
    pub fn category(&self) -> String {
        self.str_field("category")
    }

    /// Domain age details (`human`, `timestamp`, `iso`); empty if unavailable.
    pub fn domain_age(&self) -> Map<String, Value> {
        match self.field("domain_age") {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Unique identifier of the request, usable for lookups and postbacks.
    pub fn request_id(&self) -> String {
        self.str_field("request_id")
    }

    /// Errors that occurred while the service processed the request.
    pub fn errors(&self) -> Vec<String> {
        match self.field("errors") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Truthiness of a loosely typed JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Reads an integer, accepting whole-number floats the service sometimes emits.
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}
