//! Rendering options.

use serde::Deserialize;

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented plain text.
    #[default]
    Text,
    /// Minimal HTML document with a monospace block.
    Html,
}

/// Character set the report is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputEncoding {
    /// Any printable Unicode text.
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    /// Printable ASCII only.
    Ascii,
}

impl OutputEncoding {
    /// Returns true if `value` can be written in this encoding without
    /// breaking the report layout.
    #[must_use]
    pub fn can_represent(self, value: &str) -> bool {
        let printable = !value.chars().any(char::is_control);
        match self {
            Self::Utf8 => printable,
            Self::Ascii => printable && value.is_ascii(),
        }
    }
}

/// What a rendered report contains and how it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text or HTML.
    pub format: OutputFormat,
    /// Show each bug's tags.
    pub include_tags: bool,
    /// Show the reviews linked from each bug and their status.
    pub include_reviews: bool,
    /// Show every target each bug affects.
    pub include_targets: bool,
    /// Character set of the output.
    pub encoding: OutputEncoding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            include_tags: true,
            include_reviews: false,
            include_targets: false,
            encoding: OutputEncoding::Utf8,
        }
    }
}
