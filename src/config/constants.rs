//! Configuration constants.
//!
//! This module defines the fixed service endpoint, the sentinel defaults read by
//! the accessors, and the status codes and messages of locally synthesized results.

/// IP Quality Score malicious URL scanner endpoint.
///
/// Requests are issued as `{BASE_URL}/{api_key}/{encoded_url}?{strictness}`.
pub const BASE_URL: &str = "https://www.ipqualityscore.com/api/json/url";

/// User-Agent sent with every request to the reputation service.
pub const DEFAULT_USER_AGENT: &str = concat!("url_reputation/", env!("CARGO_PKG_VERSION"));

/// Default strictness forwarded to the service when none is configured.
pub const DEFAULT_STRICTNESS: i64 = 0;

// Accessor defaults
/// Integer sentinel for `risk_score` and `domain_rank` when the service did not report one.
/// No valid score or rank is negative, so this never collides with real data.
pub const DOES_NOT_EXIST: i64 = -999;
/// String default for `server`, `content_type` and `category`.
pub const NA: &str = "N/A";

// Status codes of locally synthesized results
/// URL failed local syntax validation (Not Found)
pub const STATUS_INVALID_URL: u16 = 404;
/// Upstream request allowance exhausted (Payment Required)
pub const STATUS_QUOTA_EXCEEDED: u16 = 402;
/// Response arrived but could not be decoded (Bad Gateway)
pub const STATUS_MALFORMED_RESPONSE: u16 = 502;
/// Service could not be reached (Service Unavailable)
pub const STATUS_CONNECTION_FAILED: u16 = 503;

// Messages
/// Message stored when the service cannot be reached.
pub const CONNECTION_FAILED_MESSAGE: &str =
    "Failed to establish connection to IP Quality Score API.";
/// Substring the service uses to report quota exhaustion inside a generic failure.
pub const QUOTA_EXCEEDED_MARKER: &str = "You have exceeded your request quota";
/// Prefix of the message stored when the response body is not a JSON object.
pub const MALFORMED_RESPONSE_PREFIX: &str = "Malformed response from IP Quality Score API";

/// Maximum URL length accepted by the default validator.
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;
