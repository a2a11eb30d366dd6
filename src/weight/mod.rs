//! Weight Log
//!
//! The weight screen and everything it needs:
//!
//! - **types**: `WeightEntry` and the ordered `WeightHistory`
//! - **repository**: loads/saves the history as one JSON blob
//! - **screen**: the controller driven by user interactions
//! - **view**: renderable snapshots of the screen
//!
//! # Flow
//!
//! ```text
//! Mount:   storage → JSON → WeightHistory
//! Submit:  input → WeightEntry → append → save snapshot → clear input
//! Delete:  index → remove → save snapshot
//! ```

pub mod repository;
pub mod screen;
pub mod types;
pub mod view;

pub use repository::{WeightRepository, DEFAULT_STORAGE_KEY};
pub use screen::{ScreenEvent, WeightScreen};
pub use types::{
    format_date, is_valid_date_format, WeightEntry, WeightHistory, DEFAULT_DATE_FORMAT,
};
pub use view::{HistoryRow, HistoryView, InputView, ScreenView};
