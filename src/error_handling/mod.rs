//! Error handling.
//!
//! This module provides the typed error enums shared across the application:
//! - Initialization failures (logger, HTTP client)
//! - Configuration-override failures
//! - Query-dispatch failures

mod types;

// Re-export public API
pub use types::{ConfigError, InitializationError, QueryError};
