//! File-backed key-value store
//!
//! All keys live in one JSON document:
//!
//! ```text
//! {
//!   "weightEntries": "[{\"date\":\"10/19/2026\",\"weight\":\"70\"}]"
//! }
//! ```
//!
//! Every write rewrites the whole document into a temporary sibling file and
//! renames it over the original, so readers see either the old or the new
//! document and never a partial one.

use super::{KeyValueStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Key-value store persisted as a single JSON file
#[derive(Debug)]
pub struct FileStore {
    /// Path to the storage document
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store at `path`. Nothing is touched on disk until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the storage document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> StorageResult<BTreeMap<String, String>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corruption {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    async fn write_document(&self, items: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(items)?;
        let tmp_path = self.tmp_path();

        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!("Wrote {} keys to {:?}", items.len(), self.path);
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_document().await?;
        Ok(items.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_document().await?;
        items.insert(key.to_string(), value.to_string());
        self.write_document(&items).await
    }
}
