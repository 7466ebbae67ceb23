// src/ui/widgets/mod.rs

pub mod footer;       // Key hints for the current phase.
pub mod history_view; // Recent scans, drawn from `#historyList`.
pub mod input;        // File path field and scan control.
pub mod result_view;  // Verdict and explanation, drawn from `#aiBox`.
