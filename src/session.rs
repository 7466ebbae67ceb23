// src/session.rs

use crate::config::Config;
use crate::core::client::ScanClient;
use crate::core::history::ScanHistory;
use crate::core::models::{HistoryEntry, UiPhase};
use crate::dom::document::{BUSY_LABEL, FILE_INPUT, SCAN_LABEL};
use crate::dom::{Document, SharedDocument};
use crate::errors::ScanError;
use crate::render::history::render_history;
use crate::render::result::{error_nodes, loading_nodes, render_scan_result};
use crate::render::typing::{RevealHandle, RevealOutcome};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, info_span, warn, Instrument};

/// What a call to `Session::submit` ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The control was disabled; nothing was sent.
    Ignored,
    /// A result was rendered and recorded in the history.
    Rendered,
    /// An error block was rendered with this message.
    Failed(String),
}

/// Commands accepted by a session running as a task.
#[derive(Debug, Clone)]
pub enum Command {
    SelectFile(Option<PathBuf>),
    Submit,
}

/// Notifications published by a session running as a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    PhaseChanged(UiPhase),
    HistoryChanged(usize),
}

/// Restores the submit control when dropped, so the control comes back
/// even if the submit future is abandoned mid-request. A submit only
/// starts with a file selected, so the control is always re-enabled.
struct BusyGuard {
    document: SharedDocument,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.document.with(|doc| doc.set_submit_state(true, SCAN_LABEL));
    }
}

/// All per-page state of the front end: document, selection, history
/// and the client used to reach the backend.
pub struct Session {
    document: SharedDocument,
    client: ScanClient,
    history: ScanHistory,
    typing_delay: Duration,
    selected: Option<PathBuf>,
    phase: UiPhase,
    reveals: Vec<RevealHandle>,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, ScanError> {
        Ok(Self::with_client(ScanClient::new(config)?, config.typing_delay))
    }

    pub fn with_client(client: ScanClient, typing_delay: Duration) -> Self {
        Self {
            document: SharedDocument::new(Document::new()),
            client,
            history: ScanHistory::new(),
            typing_delay,
            selected: None,
            phase: UiPhase::Idle,
            reveals: Vec::new(),
        }
    }

    pub fn document(&self) -> SharedDocument {
        self.document.clone()
    }

    pub fn history(&self) -> &ScanHistory {
        &self.history
    }

    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    /// Updates the file selection. The submit control is enabled exactly
    /// when a file is selected and no scan is in flight.
    pub fn select_file(&mut self, path: Option<PathBuf>) {
        self.selected = path.filter(|p| !p.as_os_str().is_empty());
        let name = self
            .selected
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());
        let enabled = self.selected.is_some() && self.phase != UiPhase::Scanning;

        self.document.with(|doc| {
            if let Some(input) = doc.get_mut(FILE_INPUT) {
                match &name {
                    Some(name) => input.set_attribute("value", name.clone()),
                    None => input.remove_attribute("value"),
                }
            }
            if let Some(button) = doc.submit_button_mut() {
                button.disabled = !enabled;
            }
        });
    }

    /// Runs one submit cycle for the selected file.
    ///
    /// The control is disabled and the loading placeholder shown while the
    /// request is in flight. On success the result is rendered and
    /// recorded. Any failure renders a single error block. Either way the
    /// control is restored afterwards.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.document.with(|doc| doc.is_submit_enabled()) {
            return SubmitOutcome::Ignored;
        }
        let Some(path) = self.selected.clone() else {
            return SubmitOutcome::Ignored;
        };

        let span = info_span!("submit", file = %path.display());
        async move {
            info!("Scan started.");
            self.phase = UiPhase::Scanning;
            self.document.with(|doc| {
                doc.set_submit_state(false, BUSY_LABEL);
                doc.replace_result_area(loading_nodes());
            });
            let guard = BusyGuard { document: self.document.clone() };

            let outcome = match self.client.submit(&path).await {
                Ok(result) => {
                    self.reveals = render_scan_result(&self.document, &result, self.typing_delay);
                    self.history.record(HistoryEntry::from(&result));
                    self.document.with(|doc| render_history(doc, &self.history));
                    info!(verdict = %result.verdict, risk = %result.risk_level(), "Scan rendered.");
                    self.phase = UiPhase::Result;
                    SubmitOutcome::Rendered
                }
                Err(err) => {
                    let message = err.user_message();
                    match &err {
                        ScanError::Rejected { status, .. } => {
                            warn!(status, message = %message, "Backend rejected scan.")
                        }
                        other => error!(error = %other, "Scan request failed."),
                    }
                    self.reveals.clear();
                    self.document.with(|doc| doc.replace_result_area(error_nodes(&message)));
                    self.phase = UiPhase::Error;
                    SubmitOutcome::Failed(message)
                }
            };

            drop(guard);
            outcome
        }
        .instrument(span)
        .await
    }

    /// Waits for every reveal started by the last render.
    pub async fn settle(&mut self) -> Vec<RevealOutcome> {
        let mut outcomes = Vec::with_capacity(self.reveals.len());
        for handle in self.reveals.drain(..) {
            outcomes.push(handle.finished().await);
        }
        outcomes
    }

    /// Drives the session from `commands` until the sender is dropped.
    ///
    /// Commands are not read while a submit is in flight. The channel is
    /// unbounded so senders never wait on a hung request.
    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        events: mpsc::Sender<SessionEvent>,
    ) {
        while let Some(command) = commands.recv().await {
            match command {
                Command::SelectFile(path) => self.select_file(path),
                Command::Submit => {
                    if !self.document.with(|doc| doc.is_submit_enabled()) {
                        continue;
                    }
                    let _ = events.send(SessionEvent::PhaseChanged(UiPhase::Scanning)).await;
                    let outcome = self.submit().await;
                    if outcome == SubmitOutcome::Rendered {
                        let _ = events.send(SessionEvent::HistoryChanged(self.history.len())).await;
                    }
                    let _ = events.send(SessionEvent::PhaseChanged(self.phase)).await;
                }
            }
        }
        info!("Session closed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::document::AI_BOX;

    fn session() -> Session {
        Session::new(&Config::default()).expect("client builds")
    }

    #[test]
    fn control_enabled_iff_file_selected() {
        let mut session = session();
        let doc = session.document();
        assert!(!doc.with(|d| d.is_submit_enabled()));

        session.select_file(Some(PathBuf::from("/tmp/sample.bin")));
        assert!(doc.with(|d| d.is_submit_enabled()));
        assert_eq!(
            doc.with(|d| d.get(FILE_INPUT).and_then(|i| i.attribute("value").map(str::to_owned))),
            Some("sample.bin".to_string())
        );

        session.select_file(Some(PathBuf::new()));
        assert!(!doc.with(|d| d.is_submit_enabled()));
        session.select_file(None);
        assert!(!doc.with(|d| d.is_submit_enabled()));
    }

    #[tokio::test]
    async fn submit_without_selection_is_ignored() {
        let mut session = session();
        assert_eq!(session.submit().await, SubmitOutcome::Ignored);
        assert_eq!(session.phase(), UiPhase::Idle);
        assert_eq!(session.document().with(|d| d.inner_html(AI_BOX)), "");
    }

    #[tokio::test]
    async fn unreadable_file_renders_error_and_restores_control() {
        let mut session = session();
        session.select_file(Some(PathBuf::from("/definitely/not/here.exe")));

        let outcome = session.submit().await;
        let SubmitOutcome::Failed(message) = outcome else {
            panic!("expected failure, got {outcome:?}");
        };
        assert!(!message.is_empty());
        assert_eq!(session.phase(), UiPhase::Error);
        assert!(session.history().is_empty());

        session.document().with(|d| {
            let area = d.get(AI_BOX).expect("result area");
            assert_eq!(area.select_class("error").len(), 1);
            assert!(area.select_class("loading").is_empty());
            assert!(d.is_submit_enabled());
            assert_eq!(d.submit_button().map(|b| b.text_content()).as_deref(), Some(SCAN_LABEL));
        });
    }
}
