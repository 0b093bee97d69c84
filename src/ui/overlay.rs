//! Search overlay
//!
//! Modal over the current view: free-text input on top, popular titles as a
//! two-column grid of chips below. Esc or the global shortcut closes it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, OverlayFocus, SUGGESTIONS, SUGGESTION_COLUMNS};
use crate::ui::{input_line, text::truncate, Theme};

pub const TITLE: &str = " Search Movie ";
const WIDTH: u16 = 64;
const PLACEHOLDER: &str = "Enter a movie title…";

fn suggestion_rows() -> u16 {
    SUGGESTIONS.len().div_ceil(SUGGESTION_COLUMNS) as u16
}

/// Popup rect centered horizontally, a few rows below the top
fn popup_area(area: Rect) -> Rect {
    let width = WIDTH.min(area.width.saturating_sub(4));
    // border + input box + hint + label + suggestions + note + border
    let height = (2 + 3 + 1 + 1 + suggestion_rows() + 1 + 1).min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 3,
        width,
        height,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let popup = popup_area(area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Theme::border_focused())
        .title(Span::styled(TITLE, Theme::title()))
        .title_bottom(Span::styled(" esc close ", Theme::keybind_desc()))
        .style(Theme::text());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(suggestion_rows()),
            Constraint::Length(1),
        ])
        .split(inner);

    let input_focused = app.overlay.focus == OverlayFocus::Input;
    let input = Paragraph::new(input_line(&app.overlay.input, input_focused, PLACEHOLDER))
        .style(Theme::input())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if input_focused {
                    Theme::border_focused()
                } else {
                    Theme::border()
                }),
        );
    frame.render_widget(input, chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled("Press Enter to search", Theme::keybind_desc())),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("POPULAR MOVIES", Theme::label())),
        chunks[2],
    );

    render_suggestions(frame, chunks[3], app);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "You can search for any movie, not just these",
            Theme::dimmed(),
        ))
        .alignment(Alignment::Center),
        chunks[4],
    );
}

fn render_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let column_width = area.width / SUGGESTION_COLUMNS as u16;
    let focused = app.overlay.focus == OverlayFocus::Suggestions;

    for (i, title) in SUGGESTIONS.iter().enumerate() {
        let col = (i % SUGGESTION_COLUMNS) as u16;
        let row = (i / SUGGESTION_COLUMNS) as u16;
        if row >= area.height {
            break;
        }
        let cell = Rect {
            x: area.x + col * column_width,
            y: area.y + row,
            width: column_width.saturating_sub(1),
            height: 1,
        };

        let is_selected = focused && i == app.overlay.selected_suggestion;
        let (marker, style) = if is_selected {
            ("▸ ", Theme::highlighted())
        } else {
            ("  ", Theme::tile())
        };
        let label = truncate(title, cell.width.saturating_sub(2) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, Theme::accent()),
                Span::styled(label, style),
            ])),
            cell,
        );
    }
}
