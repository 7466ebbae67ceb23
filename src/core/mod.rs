// src/core/mod.rs

/// Data structures shared across the crate: the backend's `ScanResult`,
/// history entries and the severity ladders derived from detection counts.
pub mod models;

/// HTTP transport to the scanning backend and response classification.
pub mod client;

/// Splitting of the explanation text into titled blocks.
pub mod explanation;

/// Bounded, most-recent-first scan history.
pub mod history;
