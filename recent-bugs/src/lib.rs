#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod bugs;
pub mod config;
pub mod launchpad;
pub mod report;
pub mod reviews;
pub mod runner;
pub mod summary;

#[cfg(test)]
mod test_server;

pub use bugs::{
    filter_recent, is_recent, is_recent_at, Assignee, BugRecord, BugSource, BugSourceError,
    BugStatus, Importance, TaskTarget,
};
pub use config::{ConfigError, MissingProjectPolicy, ReportConfig};
pub use launchpad::{LaunchpadClient, ResponseCache, DEFAULT_API_ROOT};
pub use report::{
    Field, OutputEncoding, OutputFormat, ProjectSection, RenderError, RenderOptions, Report,
    ReportEntry, ReportRenderer, ReviewLink, SectionBody,
};
pub use reviews::{
    extract_reviews, GerritClient, ReviewError, ReviewPattern, ReviewSource, ReviewStatus,
};
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_HORIZON_DAYS};
pub use summary::{ProjectOutcome, RunSummary};
