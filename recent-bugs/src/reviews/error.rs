//! Review lookup error types.

use thiserror::Error;

/// Errors that can occur while looking up a review.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Failed to send the request or read the response.
    #[error("Review request for change {review} failed: {source}")]
    Http {
        review: u64,
        #[source]
        source: reqwest::Error,
    },

    /// The review service answered with a non-success status.
    #[error("Review service returned {status} for change {review}")]
    Status {
        review: u64,
        status: reqwest::StatusCode,
    },

    /// The response body did not start with the JSON magic prefix.
    #[error("Response for change {review} is missing the magic prefix")]
    MissingPrefix { review: u64 },

    /// The response body after the prefix was not the expected JSON.
    #[error("Failed to decode response for change {review}: {source}")]
    Decode {
        review: u64,
        #[source]
        source: serde_json::Error,
    },

    /// The review link pattern could not be compiled.
    #[error("Invalid review link pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Failed to build the HTTP client.
    #[error("Failed to build review client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured review host does not form a valid URL.
    #[error("Invalid review host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
}
