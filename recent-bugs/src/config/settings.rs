//! Config file deserialization.

use crate::bugs::BugStatus;
use serde::Deserialize;

/// What to do when a requested project does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingProjectPolicy {
    /// Report the project as missing and carry on with the others.
    #[default]
    Skip,
    /// Stop the run.
    Abort,
}

/// Top-level structure of the config file with a single `[report]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ConfigFile {
    /// Report settings.
    #[serde(default)]
    pub report: ReportSettings,
}

/// Parsed `[report]` section. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct ReportSettings {
    /// Response cache directory; an empty string disables the cache.
    pub cache_dir: Option<String>,

    /// Project reported when none is requested.
    pub default_project: Option<String>,

    /// Statuses to search for.
    pub status_filter: Option<Vec<BugStatus>>,

    /// Host of the review service linked from bug comments.
    pub review_host: Option<String>,

    /// Root of the bug tracker web service.
    pub api_root: Option<String>,

    /// Unknown project handling.
    pub missing_project: Option<MissingProjectPolicy>,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}
