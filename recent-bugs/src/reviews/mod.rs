//! Code reviews referenced from bug discussions.
//!
//! Bug comments link to the changes that fix them. [`ReviewPattern`] pulls
//! those links out of the discussion text and a [`ReviewSource`] reports
//! where each change stands.

mod error;
mod gerrit;
mod pattern;
mod status;

pub use error::ReviewError;
pub use gerrit::{parse_change_status, GerritClient, MAGIC_PREFIX};
pub use pattern::{extract_reviews, ReviewPattern, DEFAULT_REVIEW_HOST};
pub use status::ReviewStatus;

use async_trait::async_trait;

/// Read access to a code review service.
#[async_trait]
pub trait ReviewSource {
    /// Returns the current status of `review`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError`] on transport failure, a non-success response or
    /// a malformed body. Callers treat every error as fatal.
    async fn review_status(&self, review: u64) -> Result<ReviewStatus, ReviewError>;
}
