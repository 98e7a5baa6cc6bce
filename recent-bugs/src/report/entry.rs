//! Report contents.

use crate::bugs::{Assignee, BugRecord, TaskTarget};
use crate::reviews::ReviewStatus;

/// A review linked from a bug, with its status at report time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLink {
    /// Review number.
    pub review: u64,
    /// Browser link to the review.
    pub link: String,
    /// Status returned by the review service.
    pub status: ReviewStatus,
}

/// One bug in a report.
///
/// The optional parts are `None` when they were not requested.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// 1-based position within the project section.
    pub index: usize,
    /// The bug task.
    pub bug: BugRecord,
    /// The assigned person, if any.
    pub assignee: Option<Assignee>,
    /// Free-form tags.
    pub tags: Option<Vec<String>>,
    /// Reviews linked from the discussion, in ascending review number order.
    pub reviews: Option<Vec<ReviewLink>>,
    /// Every target the bug affects.
    pub targets: Option<Vec<TaskTarget>>,
}

impl ReportEntry {
    /// Creates an entry with no enrichment.
    #[must_use]
    pub fn new(index: usize, bug: BugRecord) -> Self {
        Self {
            index,
            bug,
            assignee: None,
            tags: None,
            reviews: None,
            targets: None,
        }
    }
}

/// What a report shows for one requested project.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// The project's recent bugs, possibly none.
    Entries(Vec<ReportEntry>),
    /// The tracker does not know the project.
    Missing,
}

/// The part of a report covering one project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSection {
    /// Project name as requested.
    pub project: String,
    /// Section contents.
    pub body: SectionBody,
}

/// A complete report, one section per requested project in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Project sections.
    pub sections: Vec<ProjectSection>,
}
