// src/ui/widgets/footer.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use scanview::core::models::UiPhase;

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match app.phase {
        UiPhase::Scanning => Line::from(vec![
            Span::raw("Scanning... Press "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        _ => {
            let mut spans = vec![Span::raw("Type a path, ")];
            if app.can_submit() {
                spans.extend([key("Enter"), Span::raw(" to scan, ")]);
            }
            spans.extend([
                key("↑ ↓"),
                Span::raw(" to scroll, "),
                key("Esc"),
                Span::raw(format!(" to quit. History: {}", app.history_len)),
            ]);
            Line::from(spans)
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
