//! Conversation focus targets and the open-conversation boundary.
//!
//! Screens ask the coordinator to focus a person's conversation either
//! with a bare name or with a structured payload. Both shapes enter
//! through [`OpenConversationRequest`] and are normalized exactly once,
//! so the internal [`ConversationTarget`] stays strict: its name is a
//! validated, non-empty [`PersonName`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// PersonName
// ---------------------------------------------------------------------------

/// A non-empty person identifier, as the backend knows them.
///
/// Use [`TryFrom`] or [`FromStr`] for validated construction, or
/// [`new`](Self::new) for an unchecked path (e.g. when the value is
/// already known to be valid).
///
/// # Examples
///
/// ```
/// use recall_models::PersonName;
///
/// let name: PersonName = "Jamie".parse().unwrap();
/// assert_eq!(name.as_str(), "Jamie");
///
/// // Empty names are rejected
/// assert!("".parse::<PersonName>().is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new person name **without validation**.
    ///
    /// Prefer [`TryFrom`] or [`FromStr`] when the input is untrusted.
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ModelError::InvalidPersonName {
                value,
                reason: "must not be empty".into(),
            });
        }
        Ok(Self(value))
    }
}

impl FromStr for PersonName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// ConversationTarget
// ---------------------------------------------------------------------------

/// The normalized descriptor of a focused conversation.
///
/// Created only through [`OpenConversationRequest::normalize`], which
/// guarantees the name is present and non-empty. The optional highlight
/// pointers select a specific moment inside the conversation; the
/// avatar and headline ride along for the conversation screen's header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConversationTarget {
    /// Who the conversation is with.
    pub name: PersonName,
    /// Face image URL, when the requesting screen already has one.
    pub avatar_url: Option<String>,
    /// One-line subtitle for the conversation header.
    pub headline: Option<String>,
    /// Unix timestamp (seconds) of the session holding the highlighted
    /// moment.
    pub highlight_timestamp: Option<i64>,
    /// Index of the highlighted utterance within that session.
    pub highlight_index: Option<usize>,
}

impl ConversationTarget {
    /// A target with only a name; everything else unset.
    pub fn new(name: PersonName) -> Self {
        Self {
            name,
            avatar_url: None,
            headline: None,
            highlight_timestamp: None,
            highlight_index: None,
        }
    }
}

// ---------------------------------------------------------------------------
// OpenConversationRequest
// ---------------------------------------------------------------------------

/// An unvalidated structured open-conversation payload.
///
/// Every field is optional; a draft without a usable name normalizes to
/// nothing (see [`OpenConversationRequest::normalize`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationDraft {
    /// Candidate person name.
    pub name: Option<String>,
    /// Face image URL.
    pub avatar_url: Option<String>,
    /// One-line subtitle.
    pub headline: Option<String>,
    /// Unix timestamp (seconds) of the highlighted session.
    pub highlight_timestamp: Option<i64>,
    /// Index of the highlighted utterance.
    pub highlight_index: Option<usize>,
}

/// What a screen may hand the coordinator when asking to open a
/// conversation: a bare identifying string or a structured draft.
///
/// # Examples
///
/// ```
/// use recall_models::{ConversationDraft, OpenConversationRequest};
///
/// // The two shapes normalize to the same target.
/// let a = OpenConversationRequest::from("Jamie").normalize().unwrap();
/// let b = OpenConversationRequest::Target(ConversationDraft {
///     name: Some("Jamie".into()),
///     ..ConversationDraft::default()
/// })
/// .normalize()
/// .unwrap();
/// assert_eq!(a, b);
///
/// // A nameless draft normalizes to nothing.
/// let bad = OpenConversationRequest::Target(ConversationDraft {
///     highlight_index: Some(2),
///     ..ConversationDraft::default()
/// });
/// assert!(bad.normalize().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum OpenConversationRequest {
    /// A bare name, shorthand for a draft with only the name set.
    Name(String),
    /// A structured payload.
    Target(ConversationDraft),
}

impl OpenConversationRequest {
    /// Resolve the request into a strict [`ConversationTarget`].
    ///
    /// Returns `None` when no non-empty name can be resolved; callers
    /// treat that as a silent no-op rather than an error, since these
    /// payloads originate from UI code outside the typed core.
    pub fn normalize(self) -> Option<ConversationTarget> {
        match self {
            OpenConversationRequest::Name(name) => {
                PersonName::try_from(name).ok().map(ConversationTarget::new)
            }
            OpenConversationRequest::Target(draft) => {
                let name = PersonName::try_from(draft.name?).ok()?;
                Some(ConversationTarget {
                    name,
                    avatar_url: draft.avatar_url,
                    headline: draft.headline,
                    highlight_timestamp: draft.highlight_timestamp,
                    highlight_index: draft.highlight_index,
                })
            }
        }
    }
}

impl From<&str> for OpenConversationRequest {
    fn from(name: &str) -> Self {
        OpenConversationRequest::Name(name.to_string())
    }
}

impl From<String> for OpenConversationRequest {
    fn from(name: String) -> Self {
        OpenConversationRequest::Name(name)
    }
}

impl FromStr for OpenConversationRequest {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OpenConversationRequest::Name(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_name_rejects_empty() {
        assert!(matches!(
            "".parse::<PersonName>(),
            Err(ModelError::InvalidPersonName { .. }),
        ));
        assert!("Alex".parse::<PersonName>().is_ok());
    }

    #[test]
    fn bare_string_wraps_into_a_name_only_target() {
        let target = OpenConversationRequest::from("Jamie").normalize().unwrap();
        assert_eq!(target.name.as_str(), "Jamie");
        assert_eq!(target.avatar_url, None);
        assert_eq!(target.highlight_timestamp, None);
        assert_eq!(target.highlight_index, None);
    }

    #[test]
    fn string_and_draft_forms_are_equivalent() {
        let from_string = OpenConversationRequest::from("Jamie").normalize();
        let from_draft = OpenConversationRequest::Target(ConversationDraft {
            name: Some("Jamie".into()),
            ..ConversationDraft::default()
        })
        .normalize();
        assert_eq!(from_string, from_draft);
    }

    #[test]
    fn draft_fields_survive_normalization() {
        let target = OpenConversationRequest::Target(ConversationDraft {
            name: Some("tim".into()),
            avatar_url: Some("http://localhost:3000/faces/tim.jpg".into()),
            headline: Some("Product designer".into()),
            highlight_timestamp: Some(1_730_000_000),
            highlight_index: Some(3),
        })
        .normalize()
        .unwrap();

        assert_eq!(target.name.as_str(), "tim");
        assert_eq!(
            target.avatar_url.as_deref(),
            Some("http://localhost:3000/faces/tim.jpg"),
        );
        assert_eq!(target.headline.as_deref(), Some("Product designer"));
        assert_eq!(target.highlight_timestamp, Some(1_730_000_000));
        assert_eq!(target.highlight_index, Some(3));
    }

    #[test]
    fn empty_name_is_rejected_in_both_forms() {
        assert!(OpenConversationRequest::from("").normalize().is_none());
        assert!(OpenConversationRequest::Target(ConversationDraft {
            name: Some(String::new()),
            ..ConversationDraft::default()
        })
        .normalize()
        .is_none());
    }

    #[test]
    fn nameless_drafts_are_rejected() {
        assert!(OpenConversationRequest::Target(ConversationDraft::default())
            .normalize()
            .is_none());
        assert!(OpenConversationRequest::Target(ConversationDraft {
            highlight_index: Some(2),
            ..ConversationDraft::default()
        })
        .normalize()
        .is_none());
    }
}
