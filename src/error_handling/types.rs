//! Error type definitions.
//!
//! This module defines the typed errors used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error installing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error setting up the logger output (e.g., log file creation).
    #[error("Logger initialization error: {0}")]
    LoggerSetupError(String),

    /// Error building the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    ClientError(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    BaseUrlError(#[from] url::ParseError),

    /// The API key cannot be carried in an HTTP header.
    #[error("API key is not a valid header value")]
    ApiKeyError(#[from] reqwest::header::InvalidHeaderValue),
}

/// Errors raised while loading or overriding the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A `--hash-type` override named an algorithm outside the configured set.
    #[error("{0} is not a known hash")]
    UnknownHash(String),
}

/// Errors raised by the remote sample queries.
///
/// Only [`QueryError::IncompatibleParameters`] is intercepted at the binary
/// boundary and turned into a controlled exit; transport failures travel as
/// plain `reqwest` errors through `anyhow`.
#[derive(Error, Debug)]
pub enum QueryError {
    /// No sample variant accepts the supplied filter combination.
    #[error("Incompatible choice of parameters")]
    IncompatibleParameters,
}
