//! Screen view snapshots
//!
//! A `ScreenView` is what the weight screen looks like at one moment. It is
//! plain data so any front end can draw it; the `Display` impl renders it
//! for a terminal.

use crate::weight::types::WeightHistory;
use std::fmt;

pub const SCREEN_TITLE: &str = "Log Your Weight";
pub const INPUT_PLACEHOLDER: &str = "Enter weight in kg";
pub const SUBMIT_LABEL: &str = "Log Weight";
pub const HISTORY_TITLE: &str = "Weight History";
pub const EMPTY_HISTORY: &str = "No entries yet";

/// Snapshot of the whole screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub input: InputView,
    pub history: HistoryView,
}

/// The weight text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    pub focused: bool,
}

/// The collapsible history section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// Only the header is shown
    Collapsed,
    /// Expanded with nothing recorded
    Empty,
    /// Expanded, oldest entry first
    Rows(Vec<HistoryRow>),
}

/// One row of the expanded history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Position in the history, 0-based; this is what delete takes
    pub index: usize,
    pub date: String,
    pub weight: String,
    pub unit: String,
}

impl HistoryView {
    pub fn build(history: &WeightHistory, expanded: bool, unit: &str) -> Self {
        if !expanded {
            return HistoryView::Collapsed;
        }
        if history.is_empty() {
            return HistoryView::Empty;
        }

        HistoryView::Rows(
            history
                .iter()
                .enumerate()
                .map(|(index, entry)| HistoryRow {
                    index,
                    date: entry.date.clone(),
                    weight: entry.weight.clone(),
                    unit: unit.to_string(),
                })
                .collect(),
        )
    }

    pub fn is_expanded(&self) -> bool {
        !matches!(self, HistoryView::Collapsed)
    }
}

impl HistoryRow {
    /// Row label, e.g. `10/19/2026: 70 kg`
    pub fn label(&self) -> String {
        if self.unit.is_empty() {
            format!("{}: {}", self.date, self.weight)
        } else {
            format!("{}: {} {}", self.date, self.weight, self.unit)
        }
    }
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SCREEN_TITLE)?;
        writeln!(f)?;

        let cursor = if self.input.focused { "_" } else { "" };
        if self.input.text.is_empty() {
            writeln!(f, "[ {}{} ]", INPUT_PLACEHOLDER, cursor)?;
        } else {
            writeln!(f, "[ {}{} ]", self.input.text, cursor)?;
        }
        writeln!(f, "({})", SUBMIT_LABEL)?;
        writeln!(f)?;

        let arrow = if self.history.is_expanded() { "^" } else { "v" };
        writeln!(f, "{} {}", HISTORY_TITLE, arrow)?;

        match &self.history {
            HistoryView::Collapsed => {}
            HistoryView::Empty => writeln!(f, "  {}", EMPTY_HISTORY)?,
            HistoryView::Rows(rows) => {
                for row in rows {
                    writeln!(f, "  {:>3}. {:<30} [delete]", row.index + 1, row.label())?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::types::WeightEntry;

    #[test]
    fn test_collapsed_hides_rows() {
        let history = WeightHistory::from(vec![WeightEntry::new("1/1/2026", "70")]);
        assert_eq!(HistoryView::build(&history, false, "kg"), HistoryView::Collapsed);
    }

    #[test]
    fn test_expanded_empty_shows_placeholder() {
        let view = ScreenView {
            input: InputView {
                text: String::new(),
                focused: false,
            },
            history: HistoryView::build(&WeightHistory::new(), true, "kg"),
        };

        assert_eq!(view.history, HistoryView::Empty);
        let rendered = view.to_string();
        assert!(rendered.contains(EMPTY_HISTORY));
        assert!(rendered.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let history = WeightHistory::from(vec![
            WeightEntry::new("1/1/2026", "70"),
            WeightEntry::new("1/2/2026", "71"),
        ]);

        let HistoryView::Rows(rows) = HistoryView::build(&history, true, "kg") else {
            panic!("expected rows");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].label(), "1/1/2026: 70 kg");
        assert_eq!(rows[1].label(), "1/2/2026: 71 kg");
    }

    #[test]
    fn test_render_numbers_rows_from_one() {
        let view = ScreenView {
            input: InputView {
                text: "72".to_string(),
                focused: true,
            },
            history: HistoryView::build(
                &WeightHistory::from(vec![WeightEntry::new("1/1/2026", "70")]),
                true,
                "kg",
            ),
        };

        let rendered = view.to_string();
        assert!(rendered.contains("[ 72_ ]"));
        assert!(rendered.contains("1. 1/1/2026: 70 kg"));
        assert!(!rendered.contains(EMPTY_HISTORY));
    }

    #[test]
    fn test_label_without_unit() {
        let row = HistoryRow {
            index: 0,
            date: "1/1/2026".to_string(),
            weight: "70".to_string(),
            unit: String::new(),
        };
        assert_eq!(row.label(), "1/1/2026: 70");
    }
}
