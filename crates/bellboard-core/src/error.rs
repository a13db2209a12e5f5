//! Core error types for bellboard-core.
//!
//! The schedule computations themselves are infallible; errors only come from
//! the API boundary, configuration handling and input validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bellboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Bell API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors talking to the bell API server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL could not be parsed or joined
    #[error("Invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, timeout or other transport failure
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// Response decoded but carried out-of-range data
    #[error("Invalid data from {endpoint}: {source}")]
    InvalidData {
        endpoint: String,
        #[source]
        source: ValidationError,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be prepared
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be after start ({start})")]
    InvalidTimeRange {
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },

    /// Value outside its accepted range
    #[error("Value {value} for '{field}' is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    /// Check `value` against an inclusive range.
    pub(crate) fn check_range(
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    ) -> Result<(), ValidationError> {
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
