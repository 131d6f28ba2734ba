//! Visual theme selection.

use serde::{Deserialize, Serialize};

/// The visual theme of the application.
///
/// A theme selects a complete parallel implementation of every screen
/// and of the chrome; it carries no other state and is never persisted,
/// so every launch starts on [`Theme::Standard`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The regular look.
    Standard,
    /// The CRT-terminal look.
    Retro,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Standard => Theme::Retro,
            Theme::Retro => Theme::Standard,
        }
    }

    /// Short label for the toggle affordance.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Standard => "Standard",
            Theme::Retro => "Retro",
        }
    }

    /// Whether this is the alternate (retro) theme.
    pub fn is_retro(self) -> bool {
        matches!(self, Theme::Retro)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Standard.toggled(), Theme::Retro);
        assert_eq!(Theme::Standard.toggled().toggled(), Theme::Standard);
        assert_eq!(Theme::Retro.toggled().toggled(), Theme::Retro);
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(Theme::default(), Theme::Standard);
        assert!(!Theme::default().is_retro());
    }

    #[test]
    fn labels() {
        assert_eq!(Theme::Standard.label(), "Standard");
        assert_eq!(Theme::Retro.label(), "Retro");
    }
}
