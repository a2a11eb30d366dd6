//! Core data types for the weight log
//!
//! - `WeightEntry`: one recorded (date, weight) pair
//! - `WeightHistory`: the ordered sequence of entries, oldest first

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Default human-readable date pattern (`10/19/2026`)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Format `day` with a strftime pattern
///
/// Returns `None` when the pattern cannot render a date: unknown
/// specifiers like `%Q`, or time fields like `%H` that a date lacks.
pub fn format_date(day: NaiveDate, date_format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", day.format(date_format)).ok()?;
    Some(out)
}

/// Whether `date_format` can render a calendar date
pub fn is_valid_date_format(date_format: &str) -> bool {
    let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    format_date(sample, date_format).is_some()
}

/// One recorded weight measurement
///
/// Both fields are kept exactly as captured: the date is a display string,
/// not a sortable key, and the weight is the raw input text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeightEntry {
    pub date: String,
    pub weight: String,
}

impl WeightEntry {
    pub fn new(date: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            weight: weight.into(),
        }
    }

    /// Create an entry dated `day`, formatted with `date_format`
    ///
    /// An unusable pattern falls back to `DEFAULT_DATE_FORMAT`.
    pub fn on(day: NaiveDate, date_format: &str, weight: impl Into<String>) -> Self {
        let date = format_date(day, date_format).unwrap_or_else(|| {
            tracing::warn!(
                "Invalid date format {:?}, using {:?}",
                date_format,
                DEFAULT_DATE_FORMAT
            );
            day.format(DEFAULT_DATE_FORMAT).to_string()
        });
        Self::new(date, weight)
    }

    /// Create an entry dated today in the local timezone
    pub fn today(date_format: &str, weight: impl Into<String>) -> Self {
        Self::on(chrono::Local::now().date_naive(), date_format, weight)
    }
}

impl std::fmt::Display for WeightEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.date, self.weight)
    }
}

/// Ordered weight history
///
/// Insertion order is chronological order. Duplicates are allowed.
/// Serializes as a plain JSON array of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct WeightHistory {
    entries: Vec<WeightEntry>,
}

impl WeightHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end, returning its index
    pub fn append(&mut self, entry: WeightEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Remove the entry at `index`, keeping the others in order
    ///
    /// Returns `None` and leaves the history untouched when `index` is out
    /// of range.
    pub fn remove_at(&mut self, index: usize) -> Option<WeightEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&WeightEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    /// Encode as the stored JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode from the stored JSON array
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Vec<WeightEntry>> for WeightHistory {
    fn from(entries: Vec<WeightEntry>) -> Self {
        Self { entries }
    }
}

impl From<WeightHistory> for Vec<WeightEntry> {
    fn from(history: WeightHistory) -> Self {
        history.entries
    }
}

impl FromIterator<WeightEntry> for WeightHistory {
    fn from_iter<I: IntoIterator<Item = WeightEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WeightHistory {
    type Item = &'a WeightEntry;
    type IntoIter = std::slice::Iter<'a, WeightEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(weights: &[&str]) -> WeightHistory {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| WeightEntry::new(format!("10/{}/2026", i + 1), *w))
            .collect()
    }

    #[test]
    fn test_entry_date_formatting() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();

        let entry = WeightEntry::on(day, DEFAULT_DATE_FORMAT, "70.5");
        assert_eq!(entry.date, "3/7/2026");
        assert_eq!(entry.weight, "70.5");

        let entry = WeightEntry::on(day, "%Y-%m-%d", "70.5");
        assert_eq!(entry.date, "2026-03-07");
    }

    #[test]
    fn test_unusable_date_format_falls_back() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();

        assert_eq!(format_date(day, "%Q"), None);
        assert_eq!(format_date(day, "%H:%M"), None);
        assert!(!is_valid_date_format("%Q"));
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));

        let entry = WeightEntry::on(day, "%Q", "70");
        assert_eq!(entry.date, "10/1/2026");
        assert_eq!(WeightEntry::on(day, "%H", "70").date, "10/1/2026");
    }

    #[test]
    fn test_weight_text_kept_verbatim() {
        let entry = WeightEntry::new("1/1/2026", "about seventy");
        assert_eq!(entry.weight, "about seventy");
        assert_eq!(entry.to_string(), "1/1/2026: about seventy");
    }

    #[test]
    fn test_append_then_round_trip() {
        for weights in [&[][..], &["70"][..], &["70", "71", "70"][..]] {
            let original = history(weights);
            let entry = WeightEntry::new("12/31/2026", "69.9");

            let mut appended = original.clone();
            let index = appended.append(entry.clone());
            assert_eq!(index, original.len());

            let decoded = WeightHistory::from_json(&appended.to_json().unwrap()).unwrap();

            let mut expected: Vec<WeightEntry> = original.into();
            expected.push(entry);
            assert_eq!(decoded.entries(), expected.as_slice());
        }
    }

    #[test]
    fn test_json_layout() {
        let h = WeightHistory::from(vec![WeightEntry::new("10/19/2026", "70")]);
        assert_eq!(h.to_json().unwrap(), r#"[{"date":"10/19/2026","weight":"70"}]"#);

        let empty = WeightHistory::from_json("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut h = history(&["70", "71", "72", "73"]);
        let removed = h.remove_at(1).unwrap();

        assert_eq!(removed.weight, "71");
        assert_eq!(h.len(), 3);
        let weights: Vec<&str> = h.iter().map(|e| e.weight.as_str()).collect();
        assert_eq!(weights, vec!["70", "72", "73"]);
    }

    #[test]
    fn test_remove_is_positional_with_duplicates() {
        let mut h = WeightHistory::from(vec![
            WeightEntry::new("1/1/2026", "70"),
            WeightEntry::new("1/1/2026", "70"),
            WeightEntry::new("1/2/2026", "71"),
        ]);

        h.remove_at(1);
        assert_eq!(
            h.entries(),
            &[
                WeightEntry::new("1/1/2026", "70"),
                WeightEntry::new("1/2/2026", "71"),
            ]
        );
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut h = history(&["70"]);
        assert!(h.remove_at(1).is_none());
        assert_eq!(h.len(), 1);

        let mut empty = WeightHistory::new();
        assert!(empty.remove_at(0).is_none());
    }
}
