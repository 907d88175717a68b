//! Interaction control used to dismiss a movie.
//!
//! The widget ships two variants that differ only in how the control looks
//! and which keys activate it. Everything else about removal is shared.

use std::fmt;
use std::str::FromStr;

use crossterm::event::KeyCode;

use crate::catalog::CatalogError;

/// Accessible name of the removal control.
pub const REMOVAL_CONTROL_LABEL: &str = "Remove movie";

/// Control rendered next to each card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalControl {
    /// A delete button, activated with `d`, `Delete`, or `Enter`.
    #[default]
    Button,
    /// A checkbox, activated with `Space` or `x`.
    Checkbox,
}

impl RemovalControl {
    /// Renders the control for a card.
    #[must_use]
    pub const fn render(self, removing: bool) -> &'static str {
        match (self, removing) {
            (Self::Button, false) => "[Delete]",
            (Self::Button, true) => "[Deleting]",
            (Self::Checkbox, false) => "[ ]",
            (Self::Checkbox, true) => "[x]",
        }
    }

    /// Whether `key` activates the control.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "KeyCode match patterns prevent const evaluation"
    )]
    pub fn is_triggered_by(self, key: KeyCode) -> bool {
        match self {
            Self::Button => matches!(key, KeyCode::Char('d') | KeyCode::Delete | KeyCode::Enter),
            Self::Checkbox => matches!(key, KeyCode::Char(' ' | 'x')),
        }
    }

    /// Status-bar hint naming the activation key.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Button => "d:delete",
            Self::Checkbox => "space:check",
        }
    }

    /// Activation keys as listed in the help overlay.
    #[must_use]
    pub const fn key_names(self) -> &'static str {
        match self {
            Self::Button => "d, Del, Enter",
            Self::Checkbox => "Space, x",
        }
    }

    /// Configuration spelling of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for RemovalControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemovalControl {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "button" => Ok(Self::Button),
            "checkbox" => Ok(Self::Checkbox),
            other => Err(CatalogError::Configuration {
                message: format!("removal control must be 'button' or 'checkbox', got '{other}'"),
            }),
        }
    }
}
