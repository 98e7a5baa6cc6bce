//! Runner configuration.

use crate::config::ReportConfig;
use crate::report::RenderOptions;

/// Default recency horizon in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 2;

/// Configuration for one report run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Process-wide settings.
    report: ReportConfig,
    /// Projects requested on the command line.
    projects: Vec<String>,
    /// Recency horizon in days.
    horizon_days: u32,
    /// What the report contains and how it is written.
    render: RenderOptions,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    #[must_use]
    pub fn new(report: ReportConfig, projects: Vec<String>, horizon_days: u32) -> Self {
        Self {
            report,
            projects,
            horizon_days,
            render: RenderOptions::default(),
        }
    }

    /// Sets the rendering options.
    #[must_use]
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Returns the process-wide settings.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns the projects to report on: the requested ones, or the
    /// configured default project when none were requested.
    pub fn projects(&self) -> Vec<String> {
        if self.projects.is_empty() {
            self.report.default_project.iter().cloned().collect()
        } else {
            self.projects.clone()
        }
    }

    /// Returns the recency horizon in days.
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Returns the rendering options.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }
}
