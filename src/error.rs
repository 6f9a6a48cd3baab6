//! Error types for the Lectern console

use serde::Deserialize;
use thiserror::Error;

/// Main console error type.
///
/// Every user action maps to at most one network attempt; whatever comes
/// back is surfaced as a single notification with the server's message,
/// never retried.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Transport or connection failure before a response was read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response outside the validation range.
    #[error("Request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// Rejected payload, either locally (required fields) or by the
    /// server (400 / 422).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The user declined a destructive-action confirmation prompt.
    /// Callers treat this as a silent no-op, not an alert.
    #[error("Cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ConsoleError {
    /// Classify a non-2xx response body into the console taxonomy.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => ConsoleError::Validation(message),
            _ => ConsoleError::Api { status, message },
        }
    }
}

/// Error envelope the backend returns on failures.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
}

/// Result type alias for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
