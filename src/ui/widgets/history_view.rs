// src/ui/widgets/history_view.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};
use scanview::core::models::HistoryClass;
use scanview::dom::Document;
use scanview::dom::document::HISTORY_LIST;

fn verdict_style(class: &str) -> Style {
    if class == HistoryClass::Danger.as_ref() {
        Style::default().fg(Color::Red).bold()
    } else if class == HistoryClass::Warning.as_ref() {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Green).bold()
    }
}

/// Renders the recent-scans panel from the rows in `#historyList`.
pub fn render_history_view(frame: &mut Frame, document: &Document, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("History");

    let items: Vec<ListItem> = document
        .get(HISTORY_LIST)
        .map(|list| list.select_class("history-item"))
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            let file = item
                .select_class("history-file")
                .first()
                .map(|f| f.text_content())
                .unwrap_or_default();
            let verdict = item.select_class("history-verdict");
            let (text, style) = verdict
                .first()
                .map(|v| {
                    let class = v.classes.iter().find(|c| c.starts_with("history-") && *c != "history-verdict");
                    (v.text_content(), verdict_style(class.map(String::as_str).unwrap_or_default()))
                })
                .unwrap_or_default();
            ListItem::new(vec![
                Line::from(Span::styled(file, Style::default().bold())),
                Line::from(Span::styled(text, style)),
                Line::from(""),
            ])
        })
        .collect();

    if items.is_empty() {
        let empty = ratatui::widgets::Paragraph::new("No scans yet.".dark_gray()).block(block);
        frame.render_widget(empty, area);
        return;
    }
    frame.render_widget(List::new(items).block(block), area);
}
