// src/app.rs

use scanview::core::models::UiPhase;
use scanview::dom::SharedDocument;
use scanview::session::{Command, SessionEvent};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub const SPINNER_CHARS: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Terminal-side state. The page itself lives in the shared document,
/// the app only keeps what the terminal needs on top of it.
pub struct App {
    pub should_quit: bool,
    pub phase: UiPhase,
    pub input: String,
    pub document: SharedDocument,
    pub history_len: usize,
    /// Rows scrolled up from the bottom of the result area.
    pub scroll_back: u16,
    pub spinner_frame: usize,
    commands: mpsc::UnboundedSender<Command>,
}

impl App {
    pub fn new(document: SharedDocument, commands: mpsc::UnboundedSender<Command>) -> Self {
        Self {
            should_quit: false,
            phase: UiPhase::Idle,
            input: String::new(),
            document,
            history_len: 0,
            scroll_back: 0,
            spinner_frame: 0,
            commands,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.document.with(|doc| doc.is_submit_enabled())
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.sync_selection();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.sync_selection();
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        let trimmed = self.input.trim();
        let path = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
        // Never waits: the session keeps queued selections while a scan is
        // in flight and applies them in order once it returns.
        let _ = self.commands.send(Command::SelectFile(path));
    }

    /// Sends a submit only while the control is enabled, the way a
    /// disabled button swallows clicks.
    pub fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }
        self.scroll_back = 0;
        let _ = self.commands.send(Command::Submit);
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::PhaseChanged(phase) => self.phase = phase,
            SessionEvent::HistoryChanged(len) => self.history_len = len,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_back = self.scroll_back.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(1);
    }

    pub fn on_tick(&mut self) {
        if self.phase == UiPhase::Scanning {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
