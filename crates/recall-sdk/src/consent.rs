//! The consent-store boundary.
//!
//! The agreement gate persists a single flag across launches through
//! this contract. The durable implementation lives with the
//! application (a JSON file under the config directory);
//! [`MemoryConsentStore`] backs tests and tooling.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Errors surfaced by a consent store.
///
/// Callers at the gate swallow and log these: a failed read means
/// "not accepted", a failed write means "not recorded, retry".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file or device I/O failed.
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The stored payload could not be (de)serialized.
    #[error("storage serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store is unavailable or unusable.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// A durable key-value boundary for the consent flag.
///
/// Both operations are async; neither carries a timeout, matching the
/// gate's awaited-to-completion model.
#[allow(async_fn_in_trait)]
pub trait ConsentStore {
    /// Read the value stored under `key`, `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Durably associate `value` with `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// An in-memory store for tests and tooling.
///
/// Clones share the same map, so a "second launch" against the same
/// store observes earlier writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsentStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryConsentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsentStore for MemoryConsentStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("poisoned store lock".into()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("poisoned store lock".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_keys_read_as_none() {
        let store = MemoryConsentStore::new();
        assert_eq!(store.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn writes_are_visible_to_clones() {
        let store = MemoryConsentStore::new();
        let clone = store.clone();
        store.set("k", "v").await.unwrap();
        assert_eq!(clone.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn writes_overwrite() {
        let store = MemoryConsentStore::new();
        store.set("k", "a").await.unwrap();
        store.set("k", "b").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("b".to_string()));
    }
}
