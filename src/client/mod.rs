//! Reputation service client.
//!
//! [`ReputationClient`] validates a URL locally, spends at most one request on
//! it, and stores the normalized outcome. Every expected failure (invalid input,
//! unreachable service, exhausted quota, upstream error, undecodable body) ends
//! up in the stored [`ScanResult`]; `fetch` itself never fails.

mod request;

pub use request::{build_request_url, encode_target_url, normalize_response, redact_api_key};

use log::{debug, warn};

use crate::config::{ClientConfig, CONNECTION_FAILED_MESSAGE};
use crate::error_handling::{FailureKind, InitializationError};
use crate::initialization::init_client;
use crate::result::ScanResult;
use crate::summary::{format_summary, GradientRenderer, PlainRenderer, Renderer};
use crate::validation::{UrlSyntaxValidator, UrlValidator};

/// Client for the IP Quality Score malicious URL scanner.
///
/// Holds the credentials, the strictness level and the result of the most recent
/// [`fetch`](Self::fetch). Each `fetch` replaces the stored result entirely.
///
/// # Example
///
/// ```no_run
/// use url_reputation::ReputationClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = ReputationClient::new("my-api-key", 0)?;
/// client.fetch("https://example.com").await;
///
/// let result = client.result();
/// if result.success() && result.risk_score() >= 85 {
///     println!("{} looks dangerous", result.domain());
/// }
/// client.print(false);
/// # Ok(())
/// # }
/// ```
pub struct ReputationClient {
    api_key: String,
    strictness: i64,
    base_url: String,
    http: reqwest::Client,
    validator: Box<dyn UrlValidator>,
    result: ScanResult,
}

impl std::fmt::Debug for ReputationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReputationClient")
            .field("api_key", &"<redacted>")
            .field("strictness", &self.strictness)
            .field("base_url", &self.base_url)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl ReputationClient {
    /// Creates a client for the public endpoint using the default validator.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, strictness: i64) -> Result<Self, InitializationError> {
        Self::from_config(ClientConfig::new(api_key, strictness))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self, InitializationError> {
        let http = init_client()?;
        Ok(Self {
            api_key: config.api_key,
            strictness: config.strictness,
            base_url: config.base_url,
            http,
            validator: Box::new(UrlSyntaxValidator),
            result: ScanResult::new(),
        })
    }

    /// Replaces the URL validator.
    pub fn with_validator(mut self, validator: impl UrlValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn strictness(&self) -> i64 {
        self.strictness
    }

    /// Result of the most recent `fetch`; empty before the first one.
    pub fn result(&self) -> &ScanResult {
        &self.result
    }

    /// Whether `url` passes the configured validator.
    pub fn is_valid_url(&self, url: &str) -> bool {
        self.validator.validate(url)
    }

    /// Scans `url` and stores the normalized result.
    ///
    /// The URL is validated first so that invalid input never spends a metered
    /// request. At most one request is sent and it is never retried.
    ///
    /// Stored results:
    /// - invalid URL: `{success: false, message: "Invalid url <url>", status_code: 404}`
    /// - service unreachable: `{success: false, message: "Failed to establish connection to IP Quality Score API.", status_code: 503}`
    /// - quota exhausted: `{success: false, message: <service message>, status_code: 402}`
    /// - body not a JSON object: `{success: false, message: "Malformed response ...", status_code: 502}`
    /// - anything else: the decoded response as-is
    pub async fn fetch(&mut self, url: &str) {
        self.result = self.scan(url).await;
    }

    async fn scan(&self, url: &str) -> ScanResult {
        if !self.validator.validate(url) {
            warn!("Invalid url {url}, no request sent");
            return ScanResult::failure(FailureKind::InvalidUrl, format!("Invalid url {url}"));
        }

        let request_url = build_request_url(&self.base_url, &self.api_key, url, self.strictness);
        debug!(
            "Requesting reputation for {url}: {}",
            redact_api_key(&request_url, &self.api_key)
        );

        let response = match self.http.get(&request_url).send().await {
            Ok(response) => response,
            Err(e) => {
                // without_url() keeps the API key out of the log
                warn!(
                    "Failed to reach reputation service for {url}: {}",
                    e.without_url()
                );
                return ScanResult::failure(
                    FailureKind::ConnectionFailed,
                    CONNECTION_FAILED_MESSAGE,
                );
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return request::malformed_response(&format!(
                    "failed to read body: {}",
                    e.without_url()
                ))
            }
        };
        debug!("Reputation service answered {status} ({} bytes)", bytes.len());

        match std::str::from_utf8(&bytes) {
            Ok(body) => normalize_response(body),
            Err(e) => request::malformed_response(&format!("body is not UTF-8: {e}")),
        }
    }

    /// The assembled multi-line summary of the stored result.
    pub fn summary(&self) -> String {
        format_summary(&self.result)
    }

    /// Writes the summary to stdout, with a rainbow gradient if `rainbow` is set.
    pub fn print(&self, rainbow: bool) {
        if rainbow {
            self.print_with(&GradientRenderer::default());
        } else {
            self.print_with(&PlainRenderer);
        }
    }

    /// Hands the whole summary to `renderer` in a single call.
    pub fn print_with(&self, renderer: &dyn Renderer) {
        renderer.render(&self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<String>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&self, text: &str) {
            self.calls.borrow_mut().push(text.to_string());
        }
    }

    /// Points at a closed port so any request that slips through fails fast.
    fn offline_client() -> ReputationClient {
        ReputationClient::from_config(ClientConfig {
            api_key: "test-key".to_string(),
            strictness: 0,
            base_url: "http://127.0.0.1:1".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_new_client_is_pristine() {
        let client = ReputationClient::new("key", 1).unwrap();
        assert_eq!(client.api_key(), "key");
        assert_eq!(client.strictness(), 1);
        assert!(client.result().is_empty());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = ReputationClient::new("super-secret", 0).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_is_valid_url() {
        let client = offline_client();
        assert!(!client.is_valid_url("google"));
        assert!(client.is_valid_url("http://google.com"));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let mut client = offline_client();
        client.fetch("google").await;
        assert_eq!(
            client.result(),
            &ScanResult::failure(FailureKind::InvalidUrl, "Invalid url google")
        );
        assert_eq!(client.result().status_code(), 404);
        assert_eq!(client.result().message(), "Invalid url google");
    }

    #[tokio::test]
    async fn test_fetch_empty_url() {
        let mut client = offline_client();
        client.fetch("").await;
        assert_eq!(client.result().status_code(), 404);
        assert_eq!(client.result().message(), "Invalid url ");
    }

    #[tokio::test]
    async fn test_fetch_connection_failure() {
        let mut client = offline_client();
        client.fetch("http://google.com").await;
        assert_eq!(
            client.result(),
            &ScanResult::failure(FailureKind::ConnectionFailed, CONNECTION_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_custom_validator_is_consulted() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut client = offline_client().with_validator(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

        client.fetch("http://google.com").await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.result().status_code(), 404);
    }

    #[tokio::test]
    async fn test_fetch_replaces_previous_result() {
        let mut client = offline_client();
        client.fetch("http://google.com").await;
        assert_eq!(client.result().status_code(), 503);

        client.fetch("google").await;
        assert_eq!(client.result().status_code(), 404);
        assert_eq!(client.result().raw().len(), 3);
    }

    #[tokio::test]
    async fn test_print_with_renders_once() {
        let mut client = offline_client();
        client.fetch("google").await;

        let renderer = RecordingRenderer::default();
        client.print_with(&renderer);

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], client.summary());
        assert!(calls[0].contains("message: Invalid url google"));
        assert!(calls[0].contains("status:  404"));
    }
}
