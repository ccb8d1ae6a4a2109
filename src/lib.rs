//! url_reputation library: IP Quality Score malicious URL scanner client
//!
//! This library validates a URL locally, queries the IP Quality Score URL
//! reputation API once, and exposes the response through total accessors with
//! documented defaults. Invalid input, unreachable service, exhausted quota and
//! undecodable responses are all normalized into the same result shape instead
//! of being returned as errors.
//!
//! # Example
//!
//! ```no_run
//! use url_reputation::ReputationClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = ReputationClient::new(std::env::var("IPQS_API_KEY")?, 0)?;
//! client.fetch("https://example.com").await;
//!
//! let result = client.result();
//! println!("success={} risk_score={}", result.success(), result.risk_score());
//! client.print(true);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `fetch` is async and needs a Tokio runtime.

pub mod client;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod result;
pub mod summary;
pub mod validation;

// Re-export public API
pub use client::ReputationClient;
pub use config::{ClientConfig, LogFormat, LogLevel, DOES_NOT_EXIST, NA};
pub use error_handling::{FailureKind, InitializationError};
pub use result::ScanResult;
pub use summary::{GradientRenderer, PlainRenderer, Renderer};
pub use validation::{UrlSyntaxValidator, UrlValidator};
