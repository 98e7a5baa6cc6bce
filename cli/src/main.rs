//! CLI for recent-bugs.
//!
//! Prints a text or HTML summary of the bugs recently reported against one or
//! more Launchpad projects.

use clap::Parser;
use recent_bugs::{
    MissingProjectPolicy, OutputEncoding, OutputFormat, RenderOptions, ReportConfig, RunSummary,
    Runner, RunnerConfig, RunnerError, DEFAULT_HORIZON_DAYS,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Summarize recently reported bugs from Launchpad projects.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// History in number of days.
    #[arg(short, long, default_value_t = DEFAULT_HORIZON_DAYS)]
    days: u32,

    /// Launchpad project(s) to pull bugs from. Defaults to the configured project.
    #[arg(short, long, num_args = 1..)]
    project: Vec<String>,

    /// Output report in generated HTML.
    #[arg(short, long)]
    formatting: bool,

    /// Look up the status of reviews linked from each bug.
    #[arg(long)]
    reviews: bool,

    /// Leave bug tags out of the report.
    #[arg(long)]
    no_tags: bool,

    /// List every target each bug affects.
    #[arg(long)]
    targets: bool,

    /// Write ASCII only, substituting fields that need more.
    #[arg(long)]
    ascii: bool,

    /// Abort instead of skipping projects unknown to Launchpad.
    #[arg(long)]
    abort_on_missing: bool,

    /// Path to a TOML config file.
    #[arg(long, env = "RECENT_BUGS_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            log_summary(&summary);

            if summary.has_skipped() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, keeping stdout
///   for the report
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut report = ReportConfig::load(args.config.as_deref())?;
    if args.abort_on_missing {
        report.missing_project = MissingProjectPolicy::Abort;
    }

    let render = RenderOptions {
        format: if args.formatting {
            OutputFormat::Html
        } else {
            OutputFormat::Text
        },
        include_tags: !args.no_tags,
        include_reviews: args.reviews,
        include_targets: args.targets,
        encoding: if args.ascii {
            OutputEncoding::Ascii
        } else {
            OutputEncoding::Utf8
        },
    };

    let config = RunnerConfig::new(report, args.project, args.days).with_render_options(render);
    let runner = Runner::connect(config)?;

    let mut stdout = std::io::stdout();
    runner.run(&mut stdout).await
}

/// Logs the final run summary.
fn log_summary(summary: &RunSummary) {
    info!(
        projects = summary.projects_processed,
        skipped = summary.projects_skipped,
        considered = summary.bugs_considered,
        reported = summary.bugs_reported,
        reviews = summary.reviews_checked,
        fallbacks = summary.fallbacks,
        "Summary"
    );
}
