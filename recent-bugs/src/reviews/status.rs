//! Review status.

use serde::Serialize;
use std::fmt;

/// Lifecycle status of a review, e.g. `NEW`, `MERGED` or `ABANDONED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReviewStatus(String);

impl ReviewStatus {
    /// Wraps a status string returned by the review service.
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// Returns the status string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
