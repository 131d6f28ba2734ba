//! High-level HTTP client for the memory backend.
//!
//! [`RecallClient`] wraps a [`reqwest::Client`] and exposes typed
//! methods for the three backend routes on behalf of the application.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use recall_sdk::RecallClient;
//!
//! # async fn run() -> Result<(), recall_sdk::SdkError> {
//! let client = RecallClient::new("http://localhost:3000");
//!
//! for person in client.people().await? {
//!     println!("{} → {}", person.name, person.image_url);
//! }
//! # Ok(())
//! # }
//! ```

use recall_models::{ConversationLog, Person, ProcessOutcome};

use crate::endpoints::ApiEndpoints;
use crate::error::SdkError;

/// A connected client for one memory backend.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RecallClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecallClient {
    /// Create a client for the backend at `base_url`
    /// (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    // ------------------------------------------------------------------
    // Routes
    // ------------------------------------------------------------------

    /// Fetch all enrolled people and their face image URLs.
    pub async fn people(&self) -> Result<Vec<Person>, SdkError> {
        let res = self.http.get(ApiEndpoints::people(&self.base_url)).send().await?;
        if !res.status().is_success() {
            return Err(Self::api_error(res).await);
        }
        Ok(res.json().await?)
    }

    /// Fetch the conversation log for one person.
    ///
    /// A `404` is the backend's answer for a person with no recorded
    /// conversation yet; it maps to an empty log rather than an error,
    /// so someone enrolled seconds ago still opens cleanly.
    pub async fn conversation(&self, name: &str) -> Result<ConversationLog, SdkError> {
        let url = ApiEndpoints::conversation(&self.base_url, name);
        let res = self.http.get(url).send().await?;
        if res.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(ConversationLog::empty(name));
        }
        if !res.status().is_success() {
            return Err(Self::api_error(res).await);
        }
        Ok(res.json().await?)
    }

    /// Upload a video for face + transcript processing.
    ///
    /// The backend blocks until processing finishes, so this can take
    /// a while for long videos.
    pub async fn process_video(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ProcessOutcome, SdkError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let res = self
            .http
            .post(ApiEndpoints::process(&self.base_url))
            .multipart(form)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(Self::api_error(res).await);
        }
        Ok(res.json().await?)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access the raw HTTP client for advanced operations.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    async fn api_error(res: reqwest::Response) -> SdkError {
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        SdkError::Api { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_kept_verbatim() {
        let client = RecallClient::new("http://localhost:3000");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn clones_share_the_same_base() {
        let client = RecallClient::new("http://backend:3000");
        let clone = client.clone();
        assert_eq!(client.base_url(), clone.base_url());
    }

    #[test]
    fn api_error_display() {
        let err = SdkError::Api {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "backend answered 500: boom");
    }
}
