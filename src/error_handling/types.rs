//! Error type definitions.
//!
//! This module defines construction-time errors and the kinds of locally
//! synthesized scan failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{
    STATUS_CONNECTION_FAILED, STATUS_INVALID_URL, STATUS_MALFORMED_RESPONSE,
    STATUS_QUOTA_EXCEEDED,
};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure conditions the client turns into a normalized result instead of an error.
///
/// Upstream failures that are not quota related are passed through untouched and
/// have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// URL rejected by the validator; no request was made.
    InvalidUrl,
    /// The service could not be reached.
    ConnectionFailed,
    /// The service reported an exhausted request allowance.
    QuotaExceeded,
    /// A response arrived but its body was not a JSON object.
    MalformedResponse,
}

impl FailureKind {
    /// Status code stored in the synthesized result.
    pub fn status_code(&self) -> u16 {
        match self {
            FailureKind::InvalidUrl => STATUS_INVALID_URL,
            FailureKind::ConnectionFailed => STATUS_CONNECTION_FAILED,
            FailureKind::QuotaExceeded => STATUS_QUOTA_EXCEEDED,
            FailureKind::MalformedResponse => STATUS_MALFORMED_RESPONSE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidUrl => "Invalid URL",
            FailureKind::ConnectionFailed => "Connection failed",
            FailureKind::QuotaExceeded => "Request quota exceeded",
            FailureKind::MalformedResponse => "Malformed response",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_failure_kind_status_codes() {
        assert_eq!(FailureKind::InvalidUrl.status_code(), 404);
        assert_eq!(FailureKind::ConnectionFailed.status_code(), 503);
        assert_eq!(FailureKind::QuotaExceeded.status_code(), 402);
        assert_eq!(FailureKind::MalformedResponse.status_code(), 502);
    }

    #[test]
    fn test_failure_kind_status_codes_are_distinct() {
        let codes: HashSet<u16> = FailureKind::iter().map(|k| k.status_code()).collect();
        assert_eq!(codes.len(), FailureKind::iter().count());
    }

    #[test]
    fn test_failure_kind_display() {
        for kind in FailureKind::iter() {
            assert!(!kind.to_string().is_empty());
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
