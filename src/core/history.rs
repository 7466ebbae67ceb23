// src/core/history.rs

use crate::core::models::HistoryEntry;
use std::collections::VecDeque;
use tracing::debug;

pub const HISTORY_CAPACITY: usize = 20;

/// Most-recent-first list of finished scans, capped at `HISTORY_CAPACITY`.
/// Memory only; it is dropped with the session.
#[derive(Debug, Clone)]
pub struct ScanHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for ScanHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity + 1), capacity }
    }

    /// Prepends `entry`, evicting the oldest one on overflow.
    ///
    /// # Returns
    /// The evicted entry, if any.
    pub fn record(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            let evicted = self.entries.pop_back();
            if let Some(old) = &evicted {
                debug!(filename = %old.filename, "History full, evicted oldest entry.");
            }
            return evicted;
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::HistoryClass;
    use chrono::Utc;

    fn entry(name: &str) -> HistoryEntry {
        HistoryEntry {
            filename: name.to_string(),
            verdict: "Likely Safe".to_string(),
            class: HistoryClass::Safe,
            scanned_at: Utc::now(),
        }
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut history = ScanHistory::new();
        history.record(entry("a"));
        history.record(entry("b"));
        let names: Vec<_> = history.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn caps_at_twenty_and_evicts_first_scan() {
        let mut history = ScanHistory::new();
        for i in 1..=HISTORY_CAPACITY {
            assert!(history.record(entry(&format!("scan-{i}"))).is_none());
        }
        let evicted = history.record(entry("scan-21"));
        assert_eq!(evicted.map(|e| e.filename), Some("scan-1".to_string()));
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert!(history.iter().all(|e| e.filename != "scan-1"));

        let names: Vec<_> = history.iter().map(|e| e.filename.clone()).collect();
        let expected: Vec<_> = (2..=21).rev().map(|i| format!("scan-{i}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn repeated_filenames_are_kept() {
        let mut history = ScanHistory::new();
        history.record(entry("same.bin"));
        history.record(entry("same.bin"));
        assert_eq!(history.len(), 2);
    }
}
