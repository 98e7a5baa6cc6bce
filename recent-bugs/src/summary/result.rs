//! Per-project outcome types.

/// Result of reporting on a single project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOutcome {
    /// The project was searched and its recent bugs reported.
    Reported {
        /// Project name.
        project: String,
        /// Tasks returned by the search.
        considered: usize,
        /// Tasks that passed the recency filter.
        reported: usize,
        /// Reviews whose status was looked up.
        reviews_checked: usize,
        /// Fields written with a fallback value.
        fallbacks: usize,
    },

    /// The project was skipped.
    Skipped {
        /// Project name.
        project: String,
        /// Reason for skipping.
        reason: String,
    },
}
