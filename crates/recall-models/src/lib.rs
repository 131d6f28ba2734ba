#![deny(missing_docs)]

//! # Recall Models
//!
//! Core domain types for the Recall memory assistant: the navigation
//! coordinator, the one-time consent gate, conversation focus targets,
//! and the content shapes served by the memory backend.
//!
//! The two state machines here are purely synchronous; all I/O (the
//! consent store, the backend HTTP surface) lives in the sdk and gui
//! crates, which feed outcomes back in through the transition methods.
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`navigation`] | `NavigationState` coordinator, `ScreenKind` resolution |
//! | [`consent`] | `ConsentState` gate machine, storage key + sentinel |
//! | [`conversation`] | `PersonName`, `ConversationTarget`, open-request normalization |
//! | [`tab`] | The four bottom-bar `Tab` identifiers |
//! | [`theme`] | Binary `Theme` selection |
//! | [`people`] | Backend content: people, logs, highlights, processing outcomes |

pub mod consent;
pub mod conversation;
pub mod error;
pub mod navigation;
pub mod people;
pub mod tab;
pub mod theme;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `recall_models::Tab` directly.
pub use consent::*;
pub use conversation::*;
pub use error::*;
pub use navigation::*;
pub use people::*;
pub use tab::*;
pub use theme::*;
