//! Weight Log Storage
//!
//! Device-local key-value storage. Every value is an opaque string stored
//! under a string key; callers decide how to encode what they put there.
//!
//! - **file**: single JSON document on disk (the on-device store)
//! - **memory**: in-process map for tests and ephemeral sessions
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use weight_log::storage::{FileStore, KeyValueStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FileStore::new("./data/storage.json");
//!
//!     store.set_item("greeting", "hello").await?;
//!     assert_eq!(store.get_item("greeting").await?.as_deref(), Some("hello"));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Whole-value key-value storage
///
/// Each key holds a single value; `set_item` replaces it entirely.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when the key is absent
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}
