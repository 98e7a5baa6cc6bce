//! Bug source error types.

use thiserror::Error;

/// Errors that can occur while querying the bug tracker.
#[derive(Debug, Error)]
pub enum BugSourceError {
    /// The tracker does not know the requested project.
    #[error("Project '{project}' does not exist in the bug tracker")]
    UnknownProject { project: String },

    /// Failed to send a request or read its response.
    #[error("Bug tracker request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The tracker answered with a non-success status.
    #[error("Bug tracker returned {status} for '{url}'")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON.
    #[error("Failed to decode bug tracker response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to build the HTTP client.
    #[error("Failed to build bug tracker client: {0}")]
    Client(#[source] reqwest::Error),

    /// A link returned by the tracker could not be parsed.
    #[error("Invalid bug tracker URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
