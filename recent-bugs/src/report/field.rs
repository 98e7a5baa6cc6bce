//! Per-field fallbacks.
//!
//! A field that cannot be written in the output encoding is replaced by a
//! simpler value instead of failing the whole report. The choice is made once
//! per field and recorded in the [`Field`] variant.

use super::OutputEncoding;
use crate::bugs::{Assignee, BugRecord};

/// Shown when a bug has no assignee.
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Shown when a bug has an assignee whose name cannot be written.
pub const ASSIGNED_PLACEHOLDER: &str = "Assigned";

/// A rendered field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// The field's own value.
    Rendered(String),
    /// A substitute for a value that could not be written.
    Fallback(String),
}

impl Field {
    /// Returns the value to write.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Rendered(value) | Self::Fallback(value) => value,
        }
    }

    /// Returns true if a substitute was used.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Resolves the title of `bug`, falling back to its web link.
#[must_use]
pub fn title_field(bug: &BugRecord, encoding: OutputEncoding) -> Field {
    match bug.title.as_deref() {
        Some(title) if encoding.can_represent(title) => Field::Rendered(title.to_string()),
        _ => Field::Fallback(bug.web_link.clone()),
    }
}

/// Resolves the assignee line of a bug.
#[must_use]
pub fn assignee_field(assignee: Option<&Assignee>, encoding: OutputEncoding) -> Field {
    let Some(assignee) = assignee else {
        return Field::Rendered(NOT_ASSIGNED.to_string());
    };

    match assignee.display_name.as_deref() {
        Some(name) if encoding.can_represent(name) => Field::Rendered(format!("Assigned to {name}")),
        _ => Field::Fallback(ASSIGNED_PLACEHOLDER.to_string()),
    }
}
