// src/ui/widgets/input.rs
use crate::app::App;
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use scanview::core::models::UiPhase;
use scanview::dom::Document;

/// Renders the file path field. The block title doubles as the scan
/// control and mirrors the button in the document.
pub fn render_input(frame: &mut Frame, app: &App, document: &Document, area: Rect) {
    let (label, enabled) = document
        .submit_button()
        .map(|button| (button.text_content(), !button.disabled))
        .unwrap_or_default();
    let control_style = if enabled {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .title("File to scan")
        .title_top(Line::from(Span::styled(format!(" {label} "), control_style)).right_aligned());
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // The cursor stays hidden while a scan is in flight.
    if app.phase != UiPhase::Scanning {
        frame.set_cursor_position((cursor_column(area, app.input.chars().count()), area.y + 1));
    }
}

/// Column just after the typed text, kept inside the block's borders.
fn cursor_column(area: Rect, typed: usize) -> u16 {
    let offset = u16::try_from(typed).unwrap_or(u16::MAX).saturating_add(1);
    let last_inner = area.width.saturating_sub(2).max(1);
    area.x.saturating_add(offset.min(last_inner))
}
