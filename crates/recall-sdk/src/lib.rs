//! # Recall SDK
//!
//! Service-boundary layer for the Recall memory assistant.
//!
//! The SDK provides:
//!
//! * [`RecallClient`] — typed HTTP client for the memory backend
//!   (people, per-person conversation logs, video processing).
//! * [`ApiEndpoints`] — canonical backend URL definitions shared by
//!   clients and tooling alike.
//! * [`ConsentStore`] — the durable key-value contract behind the
//!   agreement gate, with [`MemoryConsentStore`] for tests.
//! * [`SdkError`] / [`StoreError`] — unified error types.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use recall_sdk::RecallClient;
//!
//! # async fn run() -> Result<(), recall_sdk::SdkError> {
//! let client = RecallClient::new("http://localhost:3000");
//! let log = client.conversation("tim").await?;
//! println!("{} session(s)", log.conversation.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod consent;
pub mod endpoints;
pub mod error;

pub use client::RecallClient;
pub use consent::{ConsentStore, MemoryConsentStore, StoreError};
pub use endpoints::ApiEndpoints;
pub use error::SdkError;
