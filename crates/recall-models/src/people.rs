//! Domain content types for the memory backend.
//!
//! These mirror the JSON the backend serves: the enrolled-people list,
//! per-person conversation logs (one session appended per processed
//! video), and the result of processing an upload. [`Highlight`]s are
//! not fetched; they are derived locally from the logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conversation::{ConversationDraft, OpenConversationRequest};

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// An enrolled person, as returned by the people endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// The person's name (also the key of their conversation log).
    pub name: String,
    /// Absolute URL of their enrolled face image.
    pub image_url: String,
}

impl From<&Person> for OpenConversationRequest {
    fn from(person: &Person) -> Self {
        OpenConversationRequest::Target(ConversationDraft {
            name: Some(person.name.clone()),
            avatar_url: Some(person.image_url.clone()),
            ..ConversationDraft::default()
        })
    }
}

// ---------------------------------------------------------------------------
// Conversation log
// ---------------------------------------------------------------------------

/// One spoken line of a conversation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// `"Me"` for the recording side, the person's name otherwise.
    pub speaker: String,
    /// The transcribed line.
    pub text: String,
}

impl Utterance {
    /// Whether the line was spoken by the recording side.
    pub fn is_me(&self) -> bool {
        self.speaker == "Me"
    }
}

/// One recorded conversation with a person.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversationSession {
    /// When the video was processed (unix seconds on the wire).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// The transcribed dialogue, in order.
    pub conversation: Vec<Utterance>,
}

/// The full conversation history for one person.
///
/// An unknown person yields an empty history, not an error; the
/// backend answers its "no conversation found" case with an empty list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversationLog {
    /// Whose history this is.
    pub name: String,
    /// All recorded sessions, oldest first.
    #[serde(default)]
    pub conversation: Vec<ConversationSession>,
}

impl ConversationLog {
    /// An empty history for `name`.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            conversation: Vec::new(),
        }
    }

    /// Derive the most memorable moment of the most recent session:
    /// the longest utterance, on the theory that the most substantial
    /// line is the one worth jumping back to.
    pub fn latest_highlight(&self) -> Option<Highlight> {
        let session = self.conversation.iter().max_by_key(|s| s.timestamp)?;
        let (index, utterance) = session
            .conversation
            .iter()
            .enumerate()
            .max_by_key(|(_, u)| u.text.len())?;
        Some(Highlight {
            person: self.name.clone(),
            avatar_url: None,
            timestamp: session.timestamp,
            utterance_index: index,
            quote: utterance.text.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Highlight
// ---------------------------------------------------------------------------

/// A derived memorable moment, the payload behind the highlights
/// screen's deep links into a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Whose conversation the moment belongs to.
    pub person: String,
    /// Face image URL, filled in by callers that hold the person list.
    pub avatar_url: Option<String>,
    /// The session holding the moment.
    pub timestamp: DateTime<Utc>,
    /// Index of the utterance within that session.
    pub utterance_index: usize,
    /// The line itself.
    pub quote: String,
}

impl From<&Highlight> for OpenConversationRequest {
    fn from(highlight: &Highlight) -> Self {
        OpenConversationRequest::Target(ConversationDraft {
            name: Some(highlight.person.clone()),
            avatar_url: highlight.avatar_url.clone(),
            highlight_timestamp: Some(highlight.timestamp.timestamp()),
            highlight_index: Some(highlight.utterance_index),
            ..ConversationDraft::default()
        })
    }
}

// ---------------------------------------------------------------------------
// Processing outcome
// ---------------------------------------------------------------------------

/// What the face analyzer concluded about an uploaded video.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FaceStatus {
    /// A face was found and did not match anyone enrolled.
    New,
    /// A face was found and matched an enrolled person.
    Old,
    /// No usable face appeared in the video.
    NoFace,
    /// The analyzer failed (e.g. unreadable file).
    Error,
    /// Anything the analyzer reports that this client does not know.
    #[serde(other)]
    Unknown,
}

/// The backend's answer to a processed upload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    /// Where the backend stored the uploaded file.
    pub video_path: String,
    /// The name the transcript analyzer detected, if any.
    pub guessed_name: Option<String>,
    /// The transcribed dialogue of this video.
    #[serde(default)]
    pub conversation: Vec<Utterance>,
    /// The face analyzer's conclusion.
    pub face_status: FaceStatus,
    /// The matched or newly enrolled person's name.
    pub face_name: Option<String>,
    /// Whether a new face was enrolled under the detected name.
    #[serde(default)]
    pub auto_enrolled: bool,
}

impl ProcessOutcome {
    /// The person this video was filed under, when one was actually
    /// identified. Mirrors the backend's own precedence (face match
    /// first, then the transcript guess) but refuses its `"Unknown"`
    /// placeholder.
    pub fn recognized_name(&self) -> Option<&str> {
        self.face_name
            .as_deref()
            .or(self.guessed_name.as_deref())
            .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("unknown"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
