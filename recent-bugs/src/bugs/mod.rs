//! Bug records and the tracker they come from.
//!
//! [`BugSource`] is the seam between the report pipeline and the bug tracker:
//! the pipeline only ever asks for a project's open tasks and, per task, the
//! details it wants to show.

mod error;
mod importance;
mod recency;
mod record;
mod status;

pub use error::BugSourceError;
pub use importance::Importance;
pub use recency::{filter_recent, is_recent, is_recent_at};
pub use record::{Assignee, BugRecord, TaskTarget};
pub use status::BugStatus;

use async_trait::async_trait;

/// Read access to a bug tracker.
#[async_trait]
pub trait BugSource {
    /// Returns the tasks of `project` whose status is in `statuses`, ordered
    /// by descending importance, with duplicate bugs omitted.
    ///
    /// # Errors
    ///
    /// Returns [`BugSourceError::UnknownProject`] if the tracker does not know
    /// `project`, or a transport error.
    async fn search_tasks(
        &self,
        project: &str,
        statuses: &[BugStatus],
    ) -> Result<Vec<BugRecord>, BugSourceError>;

    /// Returns the person `bug` is assigned to, if any.
    async fn assignee(&self, bug: &BugRecord) -> Result<Option<Assignee>, BugSourceError>;

    /// Returns the free-form tags of `bug`.
    async fn tags(&self, bug: &BugRecord) -> Result<Vec<String>, BugSourceError>;

    /// Returns the bodies of all comments on `bug`, concatenated.
    async fn discussion(&self, bug: &BugRecord) -> Result<String, BugSourceError>;

    /// Returns every target `bug` affects, with the task status on each.
    async fn targets(&self, bug: &BugRecord) -> Result<Vec<TaskTarget>, BugSourceError>;
}
