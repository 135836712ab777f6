//! Error types for the Anthropic API client

use thiserror::Error;

/// Errors that can occur when calling the Anthropic API
#[derive(Debug, Error)]
pub enum ClaudeError {
    /// HTTP request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body was not a valid Messages API response
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Rate limited - too many requests
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Unauthorized - invalid API key
    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    /// API returned any other non-success status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },
}
