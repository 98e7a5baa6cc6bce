//! Orchestrates a report run.
//!
//! For each project: one search, client-side recency filtering, a heading,
//! then per bug the detail fetches and review lookups it needs. Every request
//! is awaited before the next one is sent, and each entry is written as soon
//! as it is rendered.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_HORIZON_DAYS};
pub use error::RunnerError;

use crate::bugs::{filter_recent, BugRecord, BugSource, BugSourceError};
use crate::config::MissingProjectPolicy;
use crate::launchpad::LaunchpadClient;
use crate::report::{ReportEntry, ReportRenderer, ReviewLink};
use crate::reviews::{GerritClient, ReviewPattern, ReviewSource};
use crate::summary::{ProjectOutcome, RunSummary};
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use tracing::{debug, info, info_span, warn, Instrument};

/// Runs reports against a bug source and a review source.
pub struct Runner<B, R> {
    config: RunnerConfig,
    bugs: B,
    reviews: R,
    renderer: ReportRenderer,
    pattern: ReviewPattern,
}

impl Runner<LaunchpadClient, GerritClient> {
    /// Builds a runner talking to the configured Launchpad and Gerrit hosts.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if a client or the renderer cannot be built.
    pub fn connect(config: RunnerConfig) -> Result<Self, RunnerError> {
        let report = config.report();
        let bugs = LaunchpadClient::new(
            &report.api_root,
            report.cache_dir.as_deref(),
            report.request_timeout,
        )?;
        let reviews = GerritClient::new(&report.review_host, report.request_timeout)?;
        Self::new(config, bugs, reviews)
    }
}

impl<B: BugSource, R: ReviewSource> Runner<B, R> {
    /// Builds a runner from its collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the renderer or the review pattern cannot
    /// be built.
    pub fn new(config: RunnerConfig, bugs: B, reviews: R) -> Result<Self, RunnerError> {
        let renderer = ReportRenderer::new(*config.render_options())?;
        let pattern = ReviewPattern::new(&config.report().review_host)?;
        Ok(Self {
            config,
            bugs,
            reviews,
            renderer,
            pattern,
        })
    }

    /// Returns the bug source.
    pub fn bug_source(&self) -> &B {
        &self.bugs
    }

    /// Returns the review source.
    pub fn review_source(&self) -> &R {
        &self.reviews
    }

    /// Writes a report on every configured project to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on the first fetch, render or write failure.
    /// Whatever was written before the failure stays written.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, RunnerError> {
        self.run_at(out, Local::now().naive_local()).await
    }

    /// Same as [`Runner::run`], with recency evaluated at `now`.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    pub async fn run_at<W: Write>(
        &self,
        out: &mut W,
        now: NaiveDateTime,
    ) -> Result<RunSummary, RunnerError> {
        let projects = self.config.projects();
        if projects.is_empty() {
            return Err(RunnerError::NoProjects);
        }

        let mut summary = RunSummary::new();
        out.write_all(self.renderer.document_header().as_bytes())?;

        for project in &projects {
            let span = info_span!("project", project = %project);
            let outcome = self.report_project(project, now, out).instrument(span).await?;
            summary.record_outcome(&outcome);
        }

        out.write_all(self.renderer.document_footer().as_bytes())?;
        out.flush()?;

        Ok(summary)
    }

    async fn report_project<W: Write>(
        &self,
        project: &str,
        now: NaiveDateTime,
        out: &mut W,
    ) -> Result<ProjectOutcome, RunnerError> {
        info!("Searching bugs");

        let status_filter = &self.config.report().status_filter;
        let tasks = match self.bugs.search_tasks(project, status_filter).await {
            Ok(tasks) => tasks,
            Err(e @ BugSourceError::UnknownProject { .. }) => {
                return self.skip_missing_project(project, e, out);
            }
            Err(e) => return Err(e.into()),
        };

        let considered = tasks.len();
        let recent = filter_recent(tasks, self.config.horizon_days(), now);
        info!(
            considered,
            recent = recent.len(),
            horizon_days = self.config.horizon_days(),
            "Filtered bugs"
        );

        out.write_all(
            self.renderer
                .project_header(project, recent.len())?
                .as_bytes(),
        )?;

        let reported = recent.len();
        let mut reviews_checked = 0;
        let mut fallbacks = 0;

        for (position, bug) in recent.into_iter().enumerate() {
            let entry = self.build_entry(position + 1, bug).await?;
            reviews_checked += entry.reviews.as_ref().map_or(0, Vec::len);

            let rendered = self.renderer.entry(&entry)?;
            if rendered.fallbacks > 0 {
                warn!(
                    web_link = %entry.bug.web_link,
                    fallbacks = rendered.fallbacks,
                    "Rendered bug with fallback values"
                );
            }
            fallbacks += rendered.fallbacks;
            out.write_all(rendered.text.as_bytes())?;
        }

        Ok(ProjectOutcome::Reported {
            project: project.to_string(),
            considered,
            reported,
            reviews_checked,
            fallbacks,
        })
    }

    /// Applies the missing project policy.
    fn skip_missing_project<W: Write>(
        &self,
        project: &str,
        error: BugSourceError,
        out: &mut W,
    ) -> Result<ProjectOutcome, RunnerError> {
        match self.config.report().missing_project {
            MissingProjectPolicy::Abort => Err(error.into()),
            MissingProjectPolicy::Skip => {
                warn!(error = %error, "Skipping project");
                out.write_all(self.renderer.missing_project(project)?.as_bytes())?;
                Ok(ProjectOutcome::Skipped {
                    project: project.to_string(),
                    reason: error.to_string(),
                })
            }
        }
    }

    /// Fetches what the report shows about `bug`.
    async fn build_entry(&self, index: usize, bug: BugRecord) -> Result<ReportEntry, RunnerError> {
        let options = *self.config.render_options();
        let mut entry = ReportEntry::new(index, bug);
        debug!(web_link = %entry.bug.web_link, "Loading bug details");

        entry.assignee = self.bugs.assignee(&entry.bug).await?;

        if options.include_tags {
            entry.tags = Some(self.bugs.tags(&entry.bug).await?);
        }

        if options.include_targets {
            entry.targets = Some(self.bugs.targets(&entry.bug).await?);
        }

        if options.include_reviews {
            let discussion = self.bugs.discussion(&entry.bug).await?;
            let mut links = Vec::new();
            for review in self.pattern.extract(&discussion) {
                let status = self.reviews.review_status(review).await?;
                debug!(review, status = %status, "Looked up review");
                links.push(ReviewLink {
                    review,
                    link: self.pattern.link(review),
                    status,
                });
            }
            entry.reviews = Some(links);
        }

        Ok(entry)
    }
}
