//! Footer status bar with the keybinds valid in the current view

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};
use crate::ui::Theme;

fn keybinds(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.overlay.open {
        return &[("↵", "search"), ("tab", "suggestions"), ("esc", "close")];
    }
    match app.view() {
        View::Landing => &[("↵", "search"), ("ctrl+k", "suggestions"), ("ctrl+c", "quit")],
        View::Loading => &[("q", "quit")],
        View::Movie => &[
            ("/", "search"),
            ("←→", "select"),
            ("↵", "open"),
            ("↑↓", "scroll"),
            ("d", "details"),
            ("g", "top"),
            ("q", "quit"),
        ],
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.view() {
        View::Landing => " DISCOVER ",
        View::Loading => " LOADING ",
        View::Movie => " MOVIE ",
    };

    let mut spans = vec![Span::styled(mode, Theme::highlighted()), Span::raw(" ")];
    for (key, desc) in keybinds(app) {
        spans.push(Span::styled(format!(" {}", key), Theme::keybind()));
        spans.push(Span::styled(format!(":{} ", desc), Theme::keybind_desc()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Theme::status_bar()), area);
}
