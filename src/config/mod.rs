//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, sentinels, status codes)
//! - Client configuration and logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ClientConfig, LogFormat, LogLevel};
