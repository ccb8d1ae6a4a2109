//! Error handling.
//!
//! This module provides:
//! - Initialization error types (logger, HTTP client)
//! - Failure kinds for results synthesized by the client
//!
//! Scan failures are never returned as errors. They are collapsed into the
//! normalized result and inspected through its accessors.

mod types;

// Re-export public API
pub use types::{FailureKind, InitializationError};
