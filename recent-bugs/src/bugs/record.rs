//! Bug records returned by a [`BugSource`](super::BugSource).

use super::{BugStatus, Importance};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One open bug task of a project.
///
/// Deserialized straight from the tracker's bug task representation; the
/// enrichment fields (assignee name, tags, targets) are fetched separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BugRecord {
    /// Task title, e.g. `Bug #1234 in nova: "Instance fails to boot"`.
    pub title: Option<String>,

    /// Importance set by the project's triagers.
    pub importance: Importance,

    /// Task status.
    pub status: BugStatus,

    /// When the task was created.
    pub date_created: DateTime<FixedOffset>,

    /// Browser link to the task.
    pub web_link: String,

    /// API link to the bug itself.
    pub bug_link: String,

    /// API link to the assigned person, if any.
    #[serde(default)]
    pub assignee_link: Option<String>,

    /// Name of the project or series the task belongs to.
    #[serde(default)]
    pub bug_target_name: String,
}

impl BugRecord {
    /// Returns the bug number parsed from [`BugRecord::bug_link`].
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.bug_link
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// The person a bug is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Display name, when the tracker provides one.
    pub display_name: Option<String>,
}

/// One project or series affected by a bug, with the status of its task there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTarget {
    /// Target name, e.g. `nova` or `nova/havana`.
    pub bug_target_name: String,

    /// Status of the task on that target.
    pub status: BugStatus,
}
