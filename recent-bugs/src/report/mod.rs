//! Report rendering using Handlebars.
//!
//! Reports come in two formats: indented plain text, and a minimal HTML
//! document with one heading per project. Both are built from the same
//! line templates so their fields stay in step.

mod entry;
mod error;
mod field;
mod options;
mod renderer;
mod templates;

pub use entry::{ProjectSection, Report, ReportEntry, ReviewLink, SectionBody};
pub use error::RenderError;
pub use field::{assignee_field, title_field, Field, ASSIGNED_PLACEHOLDER, NOT_ASSIGNED};
pub use options::{OutputEncoding, OutputFormat, RenderOptions};
pub use renderer::{RenderedEntry, ReportRenderer};
