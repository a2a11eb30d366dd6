//! Weight history persistence
//!
//! The whole history is stored as one JSON array under a fixed key. Reads
//! and writes never fail from the caller's point of view: errors are logged
//! and the caller gets an empty history (on load) or nothing (on save).

use crate::config::StorageConfig;
use crate::storage::{FileStore, KeyValueStore, StorageResult};
use crate::weight::types::WeightHistory;
use std::sync::Arc;

/// Key the history blob is stored under
pub const DEFAULT_STORAGE_KEY: &str = "weightEntries";

/// Loads and saves the weight history through a `KeyValueStore`
#[derive(Clone)]
pub struct WeightRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl WeightRepository {
    /// Create a repository using the default storage key
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Open the file-backed store described by `config`
    pub fn open(config: &StorageConfig) -> Self {
        let path = config.storage_path();
        tracing::debug!("Weight storage at {:?}", path);
        Self::with_key(Arc::new(FileStore::new(path)), config.key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored history, falling back to an empty one on any failure
    pub async fn load(&self) -> WeightHistory {
        match self.try_load().await {
            Ok(history) => {
                tracing::debug!("Loaded {} weight entries", history.len());
                history
            }
            Err(e) => {
                tracing::error!("Failed to load weight entries: {}", e);
                WeightHistory::new()
            }
        }
    }

    /// Load the stored history, surfacing read and parse errors
    ///
    /// A missing key is an empty history, not an error.
    pub async fn try_load(&self) -> StorageResult<WeightHistory> {
        match self.store.get_item(&self.key).await? {
            Some(blob) => Ok(WeightHistory::from_json(&blob)?),
            None => Ok(WeightHistory::new()),
        }
    }

    /// Overwrite the stored history. Failures are logged, not returned.
    pub async fn save(&self, history: &WeightHistory) {
        if let Err(e) = self.try_save(history).await {
            tracing::error!("Failed to save weight entries: {}", e);
        }
    }

    /// Overwrite the stored history, surfacing encode and write errors
    pub async fn try_save(&self, history: &WeightHistory) -> StorageResult<()> {
        let blob = history.to_json()?;
        self.store.set_item(&self.key, &blob).await?;
        tracing::debug!("Saved {} weight entries", history.len());
        Ok(())
    }
}

impl std::fmt::Debug for WeightRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightRepository")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::weight::types::WeightEntry;
    use async_trait::async_trait;
    use std::io;

    /// Store whose every operation fails
    pub(crate) struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read refused").into())
        }

        async fn set_item(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "write refused").into())
        }
    }

    #[tokio::test]
    async fn test_load_missing_is_empty() {
        let repo = WeightRepository::new(Arc::new(MemoryStore::new()));
        assert!(repo.load().await.is_empty());
        assert!(repo.try_load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = Arc::new(MemoryStore::new());
        let repo = WeightRepository::new(store.clone());

        let history = WeightHistory::from(vec![
            WeightEntry::new("10/18/2026", "70"),
            WeightEntry::new("10/19/2026", "71"),
        ]);
        repo.save(&history).await;

        assert_eq!(repo.load().await, history);
        assert_eq!(
            store.get_item(DEFAULT_STORAGE_KEY).await.unwrap().as_deref(),
            Some(r#"[{"date":"10/18/2026","weight":"70"},{"date":"10/19/2026","weight":"71"}]"#)
        );
    }

    #[tokio::test]
    async fn test_corrupt_blob_loads_empty() {
        let store = Arc::new(MemoryStore::with_item(DEFAULT_STORAGE_KEY, "{oops"));
        let repo = WeightRepository::new(store);

        assert!(repo.try_load().await.is_err());
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_loads_empty() {
        let store = Arc::new(MemoryStore::with_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"date":"1/1/2026","weight":70}]"#,
        ));
        let repo = WeightRepository::new(store);

        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_broken_store_is_swallowed() {
        let repo = WeightRepository::new(Arc::new(BrokenStore));

        assert!(repo.load().await.is_empty());
        repo.save(&WeightHistory::from(vec![WeightEntry::new("1/1/2026", "70")]))
            .await;
        assert!(repo.try_save(&WeightHistory::new()).await.is_err());
    }

    #[tokio::test]
    async fn test_open_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(dir.path().to_string_lossy());

        let repo = WeightRepository::open(&config);
        repo.save(&WeightHistory::from(vec![WeightEntry::new("1/1/2026", "70")]))
            .await;

        assert!(dir.path().join("storage.json").exists());
        assert_eq!(WeightRepository::open(&config).load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_custom_key() {
        let store = Arc::new(MemoryStore::new());
        let repo = WeightRepository::with_key(store.clone(), "other");

        repo.save(&WeightHistory::from(vec![WeightEntry::new("1/1/2026", "70")]))
            .await;

        assert_eq!(repo.key(), "other");
        assert!(store.get_item(DEFAULT_STORAGE_KEY).await.unwrap().is_none());
        assert!(store.get_item("other").await.unwrap().is_some());
    }
}
