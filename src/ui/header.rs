//! Header bar: logo, search button and background-load indicator

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::{loading, Theme};

pub const HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Logo
            Constraint::Min(1),     // Search button
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("CINE", Theme::title()),
        Span::styled("PLEX", Theme::secondary().add_modifier(ratatui::style::Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, chunks[0]);

    let mut spans = vec![
        Span::styled("⌕ Search movies", Theme::text()),
        Span::raw("  "),
        Span::styled("Ctrl+K", Theme::keybind()),
    ];

    // A load started from the movie page keeps the page visible; flag it here
    if app.loading && app.movie.is_some() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} Loading…", loading::spinner_frame(app.tick)),
            Theme::loading(),
        ));
    }

    let border_style = if app.overlay.open {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let search = Paragraph::new(Line::from(spans)).style(Theme::input()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    frame.render_widget(search, chunks[1]);
}
