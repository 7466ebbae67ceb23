// src/render/mod.rs

/// Builds the result area: badge, counters and explanation blocks.
pub mod result;

/// Word-by-word reveal of explanation text.
pub mod typing;

/// Recent-scans list.
pub mod history;
