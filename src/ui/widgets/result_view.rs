// src/ui/widgets/result_view.rs

use crate::app::{App, SPINNER_CHARS};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use scanview::core::models::{DetectionStat, RiskLevel};
use scanview::dom::document::AI_BOX;
use scanview::dom::{Document, Element};
use scanview::render::typing::TYPING_CLASS;
use strum::IntoEnumIterator;

fn risk_style(badge: &Element) -> Style {
    let level = RiskLevel::iter().find(|level| badge.has_class(level.as_ref()));
    let color = match level {
        Some(RiskLevel::High) => Color::Red,
        Some(RiskLevel::Medium) => Color::Yellow,
        _ => Color::Green,
    };
    Style::default().fg(Color::Black).bg(color).bold()
}

fn stat_color(stat: &Element) -> Color {
    match DetectionStat::iter().find(|s| stat.has_class(s.as_ref())) {
        Some(DetectionStat::Malicious) => Color::Red,
        Some(DetectionStat::Suspicious) => Color::Yellow,
        Some(DetectionStat::Harmless) => Color::Green,
        _ => Color::Gray,
    }
}

/// Maps the children of the result area to styled lines, one element
/// class at a time.
fn result_lines(area: &Element, spinner: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for element in area.child_elements() {
        if element.has_class("loading") {
            lines.push(Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(Color::Cyan)),
                Span::raw(element.text_content()),
            ]));
        } else if element.has_class("error") {
            lines.push(Line::from(Span::styled(
                element.text_content(),
                Style::default().fg(Color::Red).bold(),
            )));
        } else if element.has_class("risk-badge") {
            lines.push(Line::from(Span::styled(
                format!(" {} ", element.text_content().trim()),
                risk_style(element),
            )));
        } else if element.has_class("section-title") {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                element.text_content().to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
        } else if element.has_class("stat") {
            let count = element.find_by_tag("span").map(Element::text_content).unwrap_or_default();
            let text = element.text_content();
            let label = text.strip_suffix(count.as_str()).unwrap_or(&text).trim_end().to_string();
            lines.push(Line::from(vec![
                Span::raw(format!("{label:<12}")),
                Span::styled(count, Style::default().fg(stat_color(element)).bold()),
            ]));
        } else if element.has_class("ai-block") {
            for part in element.child_elements() {
                if part.has_class("ai-title") {
                    lines.push(Line::from(Span::styled(
                        part.text_content(),
                        Style::default().fg(Color::Cyan).bold(),
                    )));
                } else if part.has_class("ai-content") {
                    let mut spans = vec![Span::raw(part.text_content())];
                    if part.has_class(TYPING_CLASS) {
                        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
                    }
                    lines.push(Line::from(spans));
                }
            }
            lines.push(Line::from(""));
        } else {
            lines.push(Line::from(element.text_content()));
        }
    }
    lines
}

/// Rows `lines` occupy once wrapped to `width` columns.
fn wrapped_rows(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines.iter().map(|line| line.width().max(1).div_ceil(width)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Renders the result area.
///
/// The view follows the bottom of `#aiBox`, where reveals append their
/// words. `app.scroll_back` lets the user look further up.
pub fn render_result_view(frame: &mut Frame, app: &App, document: &Document, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Scan Result (scroll with ↑ ↓)");
    let inner = block.inner(area);

    let Some(result_area) = document.get(AI_BOX).filter(|el| !el.children.is_empty()) else {
        let placeholder = Paragraph::new("Select a file and press Enter to scan.")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let lines = result_lines(result_area, SPINNER_CHARS[app.spinner_frame]);
    let overflow = wrapped_rows(&lines, inner.width).saturating_sub(inner.height);
    let offset = overflow.saturating_sub(app.scroll_back);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}
