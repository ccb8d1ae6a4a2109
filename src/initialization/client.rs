//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::DEFAULT_USER_AGENT;

/// Initializes the HTTP client used for reputation lookups.
///
/// Creates a `reqwest::Client` with the crate User-Agent. Timeouts are left at
/// transport defaults; the client performs no retries of its own.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails (e.g. the TLS backend
/// cannot be initialized).
pub fn init_client() -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new().user_agent(DEFAULT_USER_AGENT).build()
}
