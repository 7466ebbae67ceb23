// src/lib.rs

//! Terminal front end for a file-scanning backend.
//!
//! A [`session::Session`] owns the page state. It uploads the selected
//! file, renders the verdict into an in-memory [`dom::Document`], reveals
//! the explanation word by word and keeps a short scan history.

pub mod config;
pub mod core;
pub mod dom;
pub mod errors;
pub mod render;
pub mod session;

pub use crate::core::models::{HistoryEntry, ScanResult};
pub use errors::ScanError;
pub use session::{Session, SubmitOutcome};
