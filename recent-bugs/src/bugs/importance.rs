//! Bug importance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance assigned to a bug task by the project's triagers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
    Wishlist,
    Undecided,
    Unknown,
    Other(String),
}

impl Importance {
    /// Returns the importance as the tracker spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Wishlist => "Wishlist",
            Self::Undecided => "Undecided",
            Self::Unknown => "Unknown",
            Self::Other(importance) => importance,
        }
    }
}

impl From<String> for Importance {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Critical" => Self::Critical,
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            "Wishlist" => Self::Wishlist,
            "Undecided" => Self::Undecided,
            "Unknown" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Importance {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Importance> for String {
    fn from(value: Importance) -> Self {
        match value {
            Importance::Other(importance) => importance,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
