// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
pub struct AppLayout {
    pub input: Rect,
    pub result: Rect,
    pub history: Rect,
    pub footer: Rect,
}

/// Creates the complete application layout.
///
/// Three vertical chunks: the file input at the top, the content area in
/// the middle, the footer at the bottom. The content area is split into
/// the result view (70%) and the history panel (30%).
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[1]);

    AppLayout {
        input: main_chunks[0],
        result: content_chunks[0],
        history: content_chunks[1],
        footer: main_chunks[2],
    }
}
