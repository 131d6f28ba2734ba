//! Bottom-bar tab identifiers.

use serde::{Deserialize, Serialize};

// Re-exported so downstream crates can call `Tab::iter()` without
// depending on strum themselves.
pub use strum::IntoEnumIterator;

/// The four bottom-bar destinations of the application.
///
/// Parsing is strict: any string other than the four lowercase
/// identifiers fails to parse, which is where malformed tab requests
/// from outside the typed core are dropped (the coordinator itself
/// only ever sees a valid `Tab`).
///
/// # Examples
///
/// ```
/// use recall_models::Tab;
///
/// assert_eq!("memory".parse::<Tab>().unwrap(), Tab::Memory);
/// assert_eq!(Tab::Highlights.to_string(), "highlights");
/// assert!("settings".parse::<Tab>().is_err());
/// assert!("".parse::<Tab>().is_err());
/// ```
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// The dashboard shown after launch.
    Home,
    /// The video upload / processing flow.
    Upload,
    /// Memorable moments across all conversations.
    Highlights,
    /// The per-person memory list.
    Memory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Tab::Home.to_string(), "home");
        assert_eq!(Tab::Upload.to_string(), "upload");
        assert_eq!(Tab::Highlights.to_string(), "highlights");
        assert_eq!(Tab::Memory.to_string(), "memory");
    }

    #[test]
    fn parse_roundtrip() {
        for tab in Tab::iter() {
            assert_eq!(tab.to_string().parse::<Tab>().unwrap(), tab);
        }
    }

    #[test]
    fn unknown_or_empty_strings_are_rejected() {
        assert!("settings".parse::<Tab>().is_err());
        assert!("Memory ".parse::<Tab>().is_err());
        assert!("".parse::<Tab>().is_err());
    }

    #[test]
    fn iteration_order_matches_the_bar() {
        let order: Vec<Tab> = Tab::iter().collect();
        assert_eq!(
            order,
            vec![Tab::Home, Tab::Upload, Tab::Highlights, Tab::Memory],
        );
    }

    #[test]
    fn serde_uses_the_same_identifiers() {
        let json = serde_json::to_string(&Tab::Memory).unwrap();
        assert_eq!(json, "\"memory\"");
        let back: Tab = serde_json::from_str("\"upload\"").unwrap();
        assert_eq!(back, Tab::Upload);
    }
}
