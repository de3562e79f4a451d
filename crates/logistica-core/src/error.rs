//! API Errors
//!
//! Transport failures and non-2xx responses are the only failures the
//! dashboard distinguishes.

use std::time::Duration;
use thiserror::Error;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`ApiClient`](crate::ApiClient) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response, with the body the backend returned.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No response within the configured timeout.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// A 2xx response whose body did not match the expected shape, or a
    /// payload the backend flagged as failed.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The client could not be built from its configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound(_) => Some(404),
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
