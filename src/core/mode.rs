//! Interaction mode and keyboard focus definitions

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Interaction style gating what selecting a row does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Rows are display-only
    #[default]
    Normal,
    /// Selecting a row deletes it
    Delete,
    /// Selecting a row opens it for editing
    Edit,
}

impl Mode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Delete => "DELETE",
            Mode::Edit => "EDIT",
        }
    }
}

/// Which of the two editor layouts is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Mode buttons gate per-row gestures
    #[default]
    Modal,
    /// No modes; each row carries its own edit and delete gestures
    Classic,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modal" => Ok(Variant::Modal),
            "classic" => Ok(Variant::Classic),
            other => Err(format!(
                "unknown variant '{}', expected 'modal' or 'classic'",
                other
            )),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Modal => write!(f, "modal"),
            Variant::Classic => write!(f, "classic"),
        }
    }
}

/// Which text surface or region receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The new-item input box
    #[default]
    Input,
    /// Row navigation in the list
    List,
    /// The in-place editor of the row under edit
    RowEdit,
}
