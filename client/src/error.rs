//! Client error types.

use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`] and [`crate::TodoBoard`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-success status and an `{error}` body.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The server's `error` text
        message: String,
    },

    /// The request never got a response.
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body was not what the API promises.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Rejected locally before any request was made.
    #[error("{0}")]
    Invalid(String),

    /// Another request for the same target is still in flight.
    #[error("Another request is still in progress")]
    Busy,
}

impl ClientError {
    /// HTTP status for server-side rejections.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
