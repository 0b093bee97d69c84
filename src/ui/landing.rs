//! Landing page: headline and a single search box

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::{centered_width, input_line, Theme};

pub const HEADLINE: &str = "Discover Movies That Match Your Taste";
pub const PLACEHOLDER: &str = "Search for a movie…";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2), // Headline
            Constraint::Length(2), // Tagline
            Constraint::Length(3), // Search box
            Constraint::Length(2), // Hint
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(HEADLINE, Theme::hero_title())))
            .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Search any title and explore what to watch next",
            Theme::dimmed(),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );

    let focused = !app.overlay.open;
    let input = Paragraph::new(input_line(&app.landing, focused, PLACEHOLDER))
        .style(Theme::input())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if focused {
                    Theme::border_focused()
                } else {
                    Theme::border()
                })
                .title(Span::styled(" ⌕ SEARCH ", Theme::title())),
        );
    frame.render_widget(input, centered_width(chunks[3], 60));

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("↵", Theme::keybind()),
            Span::styled(" search   ", Theme::keybind_desc()),
            Span::styled("Ctrl+K", Theme::keybind()),
            Span::styled(" popular picks", Theme::keybind_desc()),
        ]))
        .alignment(Alignment::Center),
        chunks[4],
    );
}
