//! Error types for the Gmail client.

use thiserror::Error;

/// Errors that can occur when talking to the Gmail API.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level HTTP failure (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("Gmail API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Malformed API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
