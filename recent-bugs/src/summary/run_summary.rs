//! Run summary types.

use super::result::ProjectOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of projects reported on.
    pub projects_processed: usize,

    /// Number of projects skipped (e.g., unknown to the tracker).
    pub projects_skipped: usize,

    /// Number of tasks returned by the searches.
    pub bugs_considered: usize,

    /// Number of tasks that made it into the report.
    pub bugs_reported: usize,

    /// Number of review statuses looked up.
    pub reviews_checked: usize,

    /// Number of fields written with a fallback value.
    pub fallbacks: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a project outcome.
    pub fn record_outcome(&mut self, outcome: &ProjectOutcome) {
        match outcome {
            ProjectOutcome::Reported {
                considered,
                reported,
                reviews_checked,
                fallbacks,
                ..
            } => {
                self.projects_processed += 1;
                self.bugs_considered += considered;
                self.bugs_reported += reported;
                self.reviews_checked += reviews_checked;
                self.fallbacks += fallbacks;
            }
            ProjectOutcome::Skipped { .. } => self.projects_skipped += 1,
        }
    }

    /// Returns true if any project was skipped.
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        self.projects_skipped > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_outcomes() {
        let mut summary = RunSummary::new();

        summary.record_outcome(&ProjectOutcome::Reported {
            project: "nova".to_string(),
            considered: 12,
            reported: 3,
            reviews_checked: 2,
            fallbacks: 1,
        });
        summary.record_outcome(&ProjectOutcome::Reported {
            project: "glance".to_string(),
            considered: 4,
            reported: 0,
            reviews_checked: 0,
            fallbacks: 0,
        });

        assert_eq!(summary.projects_processed, 2);
        assert_eq!(summary.bugs_considered, 16);
        assert_eq!(summary.bugs_reported, 3);
        assert_eq!(summary.reviews_checked, 2);
        assert_eq!(summary.fallbacks, 1);
        assert!(!summary.has_skipped());
    }

    #[test]
    fn counts_skipped_projects() {
        let mut summary = RunSummary::new();

        summary.record_outcome(&ProjectOutcome::Skipped {
            project: "nonexistent".to_string(),
            reason: "unknown project".to_string(),
        });

        assert_eq!(summary.projects_processed, 0);
        assert_eq!(summary.projects_skipped, 1);
        assert!(summary.has_skipped());
    }
}
