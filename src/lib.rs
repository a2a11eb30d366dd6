//! # Weight Log
//!
//! Record body-weight measurements, keep the history in device-local
//! key-value storage, and review or delete past entries.
//!
//! ## Modules
//!
//! - [`weight`]: entries, persistence adapter and the screen controller
//! - [`storage`]: key-value stores (file-backed and in-memory)
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weight_log::{DisplayConfig, FileStore, WeightRepository, WeightScreen};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(FileStore::new("./data/storage.json"));
//!     let repo = WeightRepository::new(store);
//!
//!     let mut screen = WeightScreen::mount(repo, DisplayConfig::default()).await;
//!
//!     screen.set_input("70.4");
//!     screen.submit();
//!     screen.toggle_history();
//!     println!("{}", screen.view());
//!
//!     // Wait for the background save before exiting
//!     screen.flush().await;
//! }
//! ```

pub mod config;
pub mod logging;
pub mod storage;
pub mod weight;

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};

pub use weight::{
    HistoryRow, HistoryView, InputView, ScreenEvent, ScreenView, WeightEntry, WeightHistory,
    WeightRepository, WeightScreen, DEFAULT_DATE_FORMAT, DEFAULT_STORAGE_KEY,
};

pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig, StorageConfig};

pub use logging::init_logging;
