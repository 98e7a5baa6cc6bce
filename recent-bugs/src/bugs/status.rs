//! Bug task status types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a bug task, as reported by the tracker.
///
/// Statuses the tracker may add later are kept verbatim in [`BugStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BugStatus {
    New,
    Incomplete,
    Opinion,
    Invalid,
    WontFix,
    Expired,
    Confirmed,
    Triaged,
    InProgress,
    FixCommitted,
    FixReleased,
    Other(String),
}

impl BugStatus {
    /// Statuses that mean a bug is resolved or inactive, whatever its age.
    pub const INACTIVE: [Self; 6] = [
        Self::Incomplete,
        Self::Opinion,
        Self::WontFix,
        Self::Expired,
        Self::FixReleased,
        Self::FixCommitted,
    ];

    /// Default search filter: statuses of bugs that still need attention.
    #[must_use]
    pub fn open() -> Vec<Self> {
        vec![Self::New, Self::Confirmed, Self::Triaged, Self::InProgress]
    }

    /// Returns the status as the tracker spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "New",
            Self::Incomplete => "Incomplete",
            Self::Opinion => "Opinion",
            Self::Invalid => "Invalid",
            Self::WontFix => "Won't Fix",
            Self::Expired => "Expired",
            Self::Confirmed => "Confirmed",
            Self::Triaged => "Triaged",
            Self::InProgress => "In Progress",
            Self::FixCommitted => "Fix Committed",
            Self::FixReleased => "Fix Released",
            Self::Other(status) => status,
        }
    }

    /// Returns true if the status belongs to [`BugStatus::INACTIVE`].
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        Self::INACTIVE.contains(self)
    }
}

impl From<String> for BugStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "New" => Self::New,
            "Incomplete" => Self::Incomplete,
            "Opinion" => Self::Opinion,
            "Invalid" => Self::Invalid,
            "Won't Fix" => Self::WontFix,
            "Expired" => Self::Expired,
            "Confirmed" => Self::Confirmed,
            "Triaged" => Self::Triaged,
            "In Progress" => Self::InProgress,
            "Fix Committed" => Self::FixCommitted,
            "Fix Released" => Self::FixReleased,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for BugStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<BugStatus> for String {
    fn from(value: BugStatus) -> Self {
        match value {
            BugStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
