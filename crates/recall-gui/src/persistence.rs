use std::collections::HashMap;
use std::path::PathBuf;

use recall_sdk::{ConsentStore, StoreError};

const APP_DIR: &str = "recall-gui";
const CONSENT_FILE: &str = "consent.json";

/// File-backed consent store: a flat string map serialized as JSON
/// under the user's config directory.
///
/// When no config directory can be determined the store still
/// constructs, but every operation fails; the agreement gate treats
/// that as "not accepted" and the consent form stays up.
#[derive(Debug, Clone)]
pub struct FileConsentStore {
    path: Option<PathBuf>,
}

impl FileConsentStore {
    /// Store under `{config_dir}/recall-gui/consent.json`, creating the
    /// directory if needed.
    pub fn from_config_dir() -> Self {
        let Some(dir) = dirs::config_dir().map(|d| d.join(APP_DIR)) else {
            eprintln!("[persistence] Could not determine config directory");
            return Self { path: None };
        };
        if !dir.exists() {
            if let Err(e) = std::fs::create_dir_all(&dir) {
                eprintln!("[persistence] Failed to create {}: {e}", dir.display());
                return Self { path: None };
            }
        }
        Self {
            path: Some(dir.join(CONSENT_FILE)),
        }
    }

    /// Store at an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn path(&self) -> Result<&PathBuf, StoreError> {
        self.path
            .as_ref()
            .ok_or_else(|| StoreError::Backend("no config directory available".into()))
    }

    async fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        let path = self.path()?;
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ConsentStore for FileConsentStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.read_map().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_map().await?;
        entries.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&entries)?;
        tokio::fs::write(self.path()?, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConsentStore::at_path(dir.path().join(CONSENT_FILE));
        assert_eq!(store.get("recall.consent.accepted").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_a_new_store_at_the_same_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONSENT_FILE);

        let store = FileConsentStore::at_path(path.clone());
        store.set("recall.consent.accepted", "true").await.unwrap();

        // A fresh store (a "second launch") sees the earlier write.
        let relaunch = FileConsentStore::at_path(path);
        assert_eq!(
            relaunch.get("recall.consent.accepted").await.unwrap(),
            Some("true".to_string()),
        );
    }

    #[tokio::test]
    async fn unrelated_keys_are_preserved_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConsentStore::at_path(dir.path().join(CONSENT_FILE));
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some("1".to_string()));
        assert_eq!(store.get("b").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn corrupted_files_surface_as_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONSENT_FILE);
        tokio::fs::write(&path, "not json at all").await.unwrap();

        let store = FileConsentStore::at_path(path);
        assert!(store.get("recall.consent.accepted").await.is_err());
    }

    #[tokio::test]
    async fn pathless_store_fails_every_operation() {
        let store = FileConsentStore { path: None };
        assert!(store.get("k").await.is_err());
        assert!(store.set("k", "v").await.is_err());
    }
}
