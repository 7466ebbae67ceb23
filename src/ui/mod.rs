// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());
    // One snapshot per frame keeps the lock away from the drawing code.
    let document = app.document.snapshot();

    widgets::input::render_input(frame, app, &document, layout.input);
    widgets::result_view::render_result_view(frame, app, &document, layout.result);
    widgets::history_view::render_history_view(frame, &document, layout.history);
    widgets::footer::render_footer(frame, app, layout.footer);
}
