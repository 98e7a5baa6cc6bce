//! Runner error types.

/// Errors that end a report run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Bug tracker errors, including unknown projects under the abort policy.
    #[error(transparent)]
    BugSource(#[from] crate::bugs::BugSourceError),

    /// Review service errors.
    #[error(transparent)]
    Review(#[from] crate::reviews::ReviewError),

    /// Report rendering errors.
    #[error(transparent)]
    Render(#[from] crate::report::RenderError),

    /// Failed to write the report.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    /// Nothing to report on.
    #[error("No project requested and no default project configured")]
    NoProjects,
}
