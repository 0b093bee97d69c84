//! Terminal UI components
//!
//! Built with ratatui. `render` draws one frame from `App` state; the
//! components below it are render-only.
//!
//! The movie page is taller than the terminal, so it is drawn into an
//! offscreen buffer and the rows under the viewport are copied into the
//! frame.

pub mod footer;
pub mod header;
pub mod hero;
pub mod info;
pub mod landing;
pub mod loading;
pub mod overlay;
pub mod recommendations;
pub mod text;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputField, View};
use hero::HERO_HEIGHT;

/// Draw a full frame
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Theme::text()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEIGHT),
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header::render(frame, chunks[0], app);

    match app.view() {
        View::Landing => landing::render(frame, chunks[1], app),
        View::Loading => loading::render(frame, chunks[1], app.tick),
        View::Movie => render_movie_page(frame.buffer_mut(), chunks[1], app),
    }

    footer::render(frame, chunks[2], app);

    if app.overlay.open {
        overlay::render(frame, area, app);
    }

    if let Some(ref error) = app.error {
        render_error_popup(frame, area, error);
    }
}

/// Render hero, details and recommendations as one page, then show the
/// slice selected by the viewport
fn render_movie_page(buf: &mut Buffer, area: Rect, app: &mut App) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let Some(movie) = app.movie.as_ref() else {
        return;
    };

    let width = area.width;
    let details_height = info::height(movie, width);
    let recs_height = recommendations::height(app.recommendations.len(), width);
    let page_height = HERO_HEIGHT
        .saturating_add(details_height)
        .saturating_add(recs_height);

    let mut page = Buffer::empty(Rect::new(0, 0, width, page_height));
    page.set_style(page.area, Theme::text());

    hero::render(&mut page, Rect::new(0, 0, width, HERO_HEIGHT), movie);
    info::render(
        &mut page,
        Rect::new(0, HERO_HEIGHT, width, details_height),
        movie,
    );
    if recs_height > 0 {
        recommendations::render(
            &mut page,
            Rect::new(0, HERO_HEIGHT.saturating_add(details_height), width, recs_height),
            &app.recommendations,
            app.selected_recommendation,
        );
    }

    app.viewport.set_bounds(page_height, area.height, HERO_HEIGHT);
    blit(&page, app.viewport.offset, buf, area);
}

/// Copy rows `offset..` of `page` into `area` of `buf`
fn blit(page: &Buffer, offset: u16, buf: &mut Buffer, area: Rect) {
    let rows = area.height.min(page.area.height.saturating_sub(offset));
    let cols = area.width.min(page.area.width);
    for y in 0..rows {
        for x in 0..cols {
            if let (Some(src), Some(dst)) = (
                page.cell((x, y + offset)),
                buf.cell_mut((area.x + x, area.y + y)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

/// Centered error popup, dismissed by the next keypress
fn render_error_popup(frame: &mut Frame, area: Rect, error: &str) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 6.min(area.height);

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let error_block = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(error, Theme::error())),
        Line::from(Span::styled("press any key", Theme::dimmed())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::error())
            .title(Span::styled(" ✗ ERROR ", Theme::error()))
            .style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
    );

    frame.render_widget(error_block, popup_area);
}

/// Input contents with a block cursor, or the placeholder when empty and
/// unfocused
pub(crate) fn input_line(input: &InputField, focused: bool, placeholder: &str) -> Line<'static> {
    if input.value.is_empty() && !focused {
        return Line::from(Span::styled(placeholder.to_string(), Theme::placeholder()));
    }

    let (before, after) = input.split_at_cursor();
    let mut rest = after.chars();
    let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());

    let mut spans = vec![Span::styled(before.to_string(), Theme::input())];
    if focused {
        spans.push(Span::styled(under_cursor, Theme::input_cursor()));
    } else {
        spans.push(Span::styled(under_cursor, Theme::input()));
    }
    spans.push(Span::styled(rest.as_str().to_string(), Theme::input()));

    if input.value.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), Theme::placeholder()));
    }
    Line::from(spans)
}

/// `area` narrowed to at most `width` columns, horizontally centered
pub(crate) fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_input_line_cursor_in_middle() {
        let input = InputField {
            value: "Matrix".into(),
            cursor: 2,
        };
        let line = input_line(&input, true, "Search");
        assert_eq!(line.spans[0].content, "Ma");
        assert_eq!(line.spans[1].content, "t");
        assert_eq!(line.spans[1].style, Theme::input_cursor());
        assert_eq!(line_text(&line), "Matrix");
    }

    #[test]
    fn test_input_line_placeholder() {
        let input = InputField::default();
        assert_eq!(line_text(&input_line(&input, false, "Search")), "Search");
        // Focused and empty: cursor block then placeholder
        assert_eq!(line_text(&input_line(&input, true, "Search")), " Search");
    }

    #[test]
    fn test_blit_offset() {
        let mut page = Buffer::empty(Rect::new(0, 0, 4, 6));
        for y in 0..6u16 {
            page.set_string(0, y, y.to_string(), ratatui::style::Style::default());
        }
        let area = Rect::new(0, 0, 4, 3);
        let mut frame = Buffer::empty(area);
        blit(&page, 2, &mut frame, area);
        assert_eq!(frame.cell((0, 0)).unwrap().symbol(), "2");
        assert_eq!(frame.cell((0, 2)).unwrap().symbol(), "4");
    }

    #[test]
    fn test_centered_width() {
        let area = Rect::new(0, 5, 100, 3);
        assert_eq!(centered_width(area, 60), Rect::new(20, 5, 60, 3));
        assert_eq!(centered_width(area, 200), area);
    }
}
