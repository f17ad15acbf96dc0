//! Error types for the JobScout client

use thiserror::Error;

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Transport-level failures talking to the server
///
/// None of these reach the user during a search: [`crate::SearchClient`]
/// recovers from all of them with the local fallback.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(err) => err.status().map(|s| s.as_u16()),
            Self::ParseError(_) => None,
        }
    }
}

/// Criteria rejected before any request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither keyword nor location was given
    #[error("Please enter a keyword or location")]
    MissingKeywordAndLocation,

    /// No job source was selected
    #[error("Please select at least one job source")]
    NoSources,
}
