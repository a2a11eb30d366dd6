//! Weight Log screen controller
//!
//! Owns the in-memory history and the state of the input field and the
//! history toggle. Every call here corresponds to one user interaction.
//! Mutations persist a snapshot of the full history in a background task, so
//! the caller never waits on storage; `flush` waits for those writes.
//!
//! Interested front ends call `subscribe` and redraw from `view` whenever a
//! `ScreenEvent` arrives.

use crate::config::DisplayConfig;
use crate::weight::repository::WeightRepository;
use crate::weight::types::{WeightEntry, WeightHistory};
use crate::weight::view::{HistoryView, InputView, ScreenView};
use chrono::NaiveDate;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

const EVENT_CAPACITY: usize = 64;

/// Notification that the screen changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// History read from storage by `load`
    Loaded { count: usize },
    /// Input field text replaced
    InputChanged,
    /// New entry appended at `index`
    EntryLogged { index: usize, entry: WeightEntry },
    /// Entry removed from `index`
    EntryDeleted { index: usize, entry: WeightEntry },
    /// History section shown or hidden
    HistoryToggled { expanded: bool },
}

/// The Weight Log screen
pub struct WeightScreen {
    repo: WeightRepository,
    display: DisplayConfig,
    history: WeightHistory,
    input: String,
    input_focused: bool,
    history_expanded: bool,
    /// Most recent save; each save waits for the one before it
    pending_save: Option<JoinHandle<()>>,
    events: broadcast::Sender<ScreenEvent>,
}

impl WeightScreen {
    /// Create the screen with an empty history, collapsed, empty input
    ///
    /// Call `load` afterwards to read the stored history. Subscribing in
    /// between delivers the `Loaded` event.
    pub fn new(repo: WeightRepository, display: DisplayConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            repo,
            display,
            history: WeightHistory::new(),
            input: String::new(),
            input_focused: false,
            history_expanded: false,
            pending_save: None,
            events,
        }
    }

    /// Create the screen and load the stored history
    pub async fn mount(repo: WeightRepository, display: DisplayConfig) -> Self {
        let mut screen = Self::new(repo, display);
        screen.load().await;
        screen
    }

    /// Replace the in-memory history with the stored one
    pub async fn load(&mut self) {
        self.history = self.repo.load().await;

        tracing::info!("Weight screen loaded {} entries", self.history.len());
        self.notify(ScreenEvent::Loaded {
            count: self.history.len(),
        });
    }

    /// Receive a `ScreenEvent` for every later change
    pub fn subscribe(&self) -> broadcast::Receiver<ScreenEvent> {
        self.events.subscribe()
    }

    pub fn history(&self) -> &WeightHistory {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the input field has focus (on-screen keyboard up)
    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn is_history_expanded(&self) -> bool {
        self.history_expanded
    }

    /// Focus the input field
    pub fn focus_input(&mut self) {
        self.input_focused = true;
    }

    /// Replace the input field text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.input_focused = true;
        self.notify(ScreenEvent::InputChanged);
    }

    /// Log the input text as today's weight
    ///
    /// Does nothing when the input is empty. Otherwise appends the entry,
    /// saves the history, clears the input and drops focus.
    pub fn submit(&mut self) -> Option<WeightEntry> {
        self.submit_on(chrono::Local::now().date_naive())
    }

    /// Log the input text as the weight for `day`
    pub fn submit_on(&mut self, day: NaiveDate) -> Option<WeightEntry> {
        if self.input.is_empty() {
            return None;
        }

        let weight = std::mem::take(&mut self.input);
        let entry = WeightEntry::on(day, &self.display.date_format, weight);
        let index = self.history.append(entry.clone());

        tracing::debug!("Logged weight {} at index {}", entry, index);
        self.persist();
        self.input_focused = false;

        self.notify(ScreenEvent::EntryLogged {
            index,
            entry: entry.clone(),
        });
        Some(entry)
    }

    /// Delete the entry at `index`
    ///
    /// Out-of-range indices are ignored and nothing is saved.
    pub fn delete_entry(&mut self, index: usize) -> Option<WeightEntry> {
        let Some(entry) = self.history.remove_at(index) else {
            tracing::debug!(
                "Ignoring delete at {} (history has {} entries)",
                index,
                self.history.len()
            );
            return None;
        };

        tracing::debug!("Deleted weight {} at index {}", entry, index);
        self.persist();

        self.notify(ScreenEvent::EntryDeleted {
            index,
            entry: entry.clone(),
        });
        Some(entry)
    }

    /// Show or hide the history section, returning the new state
    pub fn toggle_history(&mut self) -> bool {
        self.history_expanded = !self.history_expanded;
        self.notify(ScreenEvent::HistoryToggled {
            expanded: self.history_expanded,
        });
        self.history_expanded
    }

    /// Snapshot of what the screen currently shows
    pub fn view(&self) -> ScreenView {
        ScreenView {
            input: InputView {
                text: self.input.clone(),
                focused: self.input_focused,
            },
            history: HistoryView::build(
                &self.history,
                self.history_expanded,
                &self.display.unit_label,
            ),
        }
    }

    /// Wait until every save issued so far has finished
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending_save.take() {
            if let Err(e) = handle.await {
                tracing::error!("Weight save task failed: {}", e);
            }
        }
    }

    /// Save a snapshot of the current history in the background
    fn persist(&mut self) {
        let repo = self.repo.clone();
        let snapshot = self.history.clone();
        let previous = self.pending_save.take();

        self.pending_save = Some(tokio::spawn(async move {
            if let Some(previous) = previous {
                let _ = previous.await;
            }
            repo.save(&snapshot).await;
        }));
    }

    fn notify(&self, event: ScreenEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}

impl std::fmt::Debug for WeightScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightScreen")
            .field("entries", &self.history.len())
            .field("input", &self.input)
            .field("history_expanded", &self.history_expanded)
            .finish_non_exhaustive()
    }
}
