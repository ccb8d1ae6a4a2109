//! Request construction and response normalization.

use log::warn;
use serde_json::Value;
use url::form_urlencoded;

use crate::config::MALFORMED_RESPONSE_PREFIX;
use crate::error_handling::FailureKind;
use crate::result::ScanResult;

/// Form-encodes a target URL for the request path.
///
/// Spaces become `+` and every reserved character (`:`, `/`, `?`, `&`, ...) is
/// percent-encoded, so the whole target fits in a single path segment.
pub fn encode_target_url(url: &str) -> String {
    form_urlencoded::byte_serialize(url.as_bytes()).collect()
}

/// Builds `{base_url}/{api_key}/{encoded url}?{strictness}`.
///
/// Strictness is a bare integer in the query position, not a `key=value` pair.
pub fn build_request_url(base_url: &str, api_key: &str, url: &str, strictness: i64) -> String {
    format!(
        "{}/{}/{}?{}",
        base_url.trim_end_matches('/'),
        api_key,
        encode_target_url(url),
        strictness
    )
}

/// Replaces the API key in a request URL so it can be logged.
pub fn redact_api_key(request_url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return request_url.to_string();
    }
    request_url.replace(api_key, "<redacted>")
}

/// Turns a response body into the stored result.
///
/// A JSON object is stored as-is, except that a failure whose message reports an
/// exhausted quota is reclassified as [`FailureKind::QuotaExceeded`]. Anything
/// else becomes a [`FailureKind::MalformedResponse`] result.
pub fn normalize_response(body: &str) -> ScanResult {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            let result = ScanResult::from(map);
            if result.is_quota_exceeded() {
                let message = result.message();
                warn!("Reputation service quota exhausted: {message}");
                ScanResult::failure(FailureKind::QuotaExceeded, message)
            } else {
                result
            }
        }
        Ok(other) => malformed_response(&format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        )),
        Err(e) => malformed_response(&e.to_string()),
    }
}

pub(crate) fn malformed_response(detail: &str) -> ScanResult {
    warn!("{MALFORMED_RESPONSE_PREFIX}: {detail}");
    ScanResult::failure(
        FailureKind::MalformedResponse,
        format!("{MALFORMED_RESPONSE_PREFIX}: {detail}"),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BASE_URL;

    #[test]
    fn test_encode_space_as_plus() {
        let encoded = encode_target_url("http://a.com/b c");
        assert_eq!(encoded, "http%3A%2F%2Fa.com%2Fb+c");
        assert!(!encoded.contains("%20"));
    }

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(
            encode_target_url("https://example.com/p?q=1&r=2#top"),
            "https%3A%2F%2Fexample.com%2Fp%3Fq%3D1%26r%3D2%23top"
        );
        assert_eq!(encode_target_url("a+b"), "a%2Bb");
    }

    #[test]
    fn test_build_request_url_shape() {
        let url = build_request_url(BASE_URL, "KEY", "https://google.com", 0);
        assert_eq!(
            url,
            "https://www.ipqualityscore.com/api/json/url/KEY/https%3A%2F%2Fgoogle.com?0"
        );
    }

    #[test]
    fn test_build_request_url_negative_strictness() {
        let url = build_request_url("http://127.0.0.1:9/", "KEY", "http://a.com", -9);
        assert_eq!(url, "http://127.0.0.1:9/KEY/http%3A%2F%2Fa.com?-9");
    }

    #[test]
    fn test_redact_api_key() {
        let url = build_request_url(BASE_URL, "s3cret", "http://a.com", 1);
        let redacted = redact_api_key(&url, "s3cret");
        assert!(!redacted.contains("s3cret"));
        assert!(redacted.contains("<redacted>"));
        assert_eq!(redact_api_key("http://x", ""), "http://x");
    }

    #[test]
    fn test_normalize_quota_exceeded() {
        let result = normalize_response(
            r#"{"success": false, "message": "You have exceeded your request quota for today."}"#,
        );
        assert!(!result.success());
        assert_eq!(result.status_code(), 402);
        assert_eq!(
            result.message(),
            "You have exceeded your request quota for today."
        );
        assert_eq!(result.raw().len(), 3);
    }

    #[test]
    fn test_normalize_quota_message_on_success_is_kept() {
        let body = r#"{"success": true, "message": "You have exceeded your request quota soon", "status_code": 200}"#;
        let result = normalize_response(body);
        assert!(result.success());
        assert_eq!(result.status_code(), 200);
    }

    #[test]
    fn test_normalize_generic_failure_passes_through() {
        let body = r#"{"success": false, "message": "Invalid or unauthorized key.", "request_id": "abc"}"#;
        let result = normalize_response(body);
        assert!(!result.success());
        assert_eq!(result.message(), "Invalid or unauthorized key.");
        assert_eq!(result.request_id(), "abc");
        assert_eq!(result.status_code(), 0);
    }

    #[test]
    fn test_normalize_not_json() {
        let result = normalize_response("<html>502 Bad Gateway</html>");
        assert!(!result.success());
        assert_eq!(result.status_code(), 502);
        assert!(result.message().starts_with(MALFORMED_RESPONSE_PREFIX));
    }

    #[test]
    fn test_normalize_non_object_json() {
        let result = normalize_response("[1, 2, 3]");
        assert_eq!(result.status_code(), 502);
        assert!(result.message().contains("an array"));
    }
}
