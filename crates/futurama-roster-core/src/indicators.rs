//! Status indicators for consistent UI representation
//!
//! Maps a character's lifecycle status onto a three-way visual category.

use futurama_rs::{Character, CharacterStatus};
use serde::{Deserialize, Serialize};

/// Visual category for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StatusCategory {
    /// Alive
    Positive,
    /// Dead
    Negative,
    /// Anything else, including unknown or empty status text
    #[default]
    Neutral,
}

impl StatusCategory {
    /// Unicode symbol for this category
    pub fn symbol(&self) -> &'static str {
        match self {
            StatusCategory::Positive => "●",
            StatusCategory::Negative => "✗",
            StatusCategory::Neutral => "○",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Positive => "Positive",
            StatusCategory::Negative => "Negative",
            StatusCategory::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&CharacterStatus> for StatusCategory {
    fn from(status: &CharacterStatus) -> Self {
        match status {
            CharacterStatus::Alive => StatusCategory::Positive,
            CharacterStatus::Dead => StatusCategory::Negative,
            CharacterStatus::Other(_) => StatusCategory::Neutral,
        }
    }
}

/// Trait for types that can report a status category
pub trait HasCategory {
    fn category(&self) -> StatusCategory;
}

impl HasCategory for CharacterStatus {
    fn category(&self) -> StatusCategory {
        StatusCategory::from(self)
    }
}

impl HasCategory for Character {
    fn category(&self) -> StatusCategory {
        self.status.category()
    }
}

/// Categorize raw status text
///
/// Total: every string maps to exactly one category.
///
/// # Examples
///
/// ```
/// use futurama_roster_core::indicators::{categorize_status, StatusCategory};
///
/// assert_eq!(categorize_status("ALIVE"), StatusCategory::Positive);
/// assert_eq!(categorize_status("DEAD"), StatusCategory::Negative);
/// assert_eq!(categorize_status("UNKNOWN"), StatusCategory::Neutral);
/// ```
pub fn categorize_status(status: &str) -> StatusCategory {
    StatusCategory::from(&CharacterStatus::from(status))
}
