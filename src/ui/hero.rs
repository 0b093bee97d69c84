//! Hero banner
//!
//! Top of the movie page: category label, big title, one metadata line and
//! the trailer/watch links.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::models::Movie;
use crate::ui::text::truncate;
use crate::ui::Theme;

/// Rows taken by the hero banner; the details section starts here
pub const HERO_HEIGHT: u16 = 12;

/// Content lines, bottom-aligned inside the banner
pub fn lines(movie: &Movie, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("MOVIE", Theme::category())),
        Line::from(Span::styled(truncate(&movie.title.to_uppercase(), width), Theme::hero_title())),
    ];

    let mut meta: Vec<Span<'static>> = Vec::new();
    let mut push_meta = |span: Span<'static>| {
        if !meta.is_empty() {
            meta.push(Span::styled(" · ", Theme::dimmed()));
        }
        meta.push(span);
    };
    if let Some(year) = movie.year() {
        push_meta(Span::styled(year.to_string(), Theme::year()));
    }
    let runtime = movie.runtime_label();
    if !runtime.is_empty() {
        push_meta(Span::styled(runtime, Theme::duration()));
    }
    if !movie.genres.is_empty() {
        push_meta(Span::styled(movie.genres_label(), Theme::secondary()));
    }
    if let Some(rating) = movie.rating {
        push_meta(Span::styled(format!("★ {:.1}", rating), Theme::rating(rating)));
    }
    if !movie.language.is_empty() {
        push_meta(Span::styled(movie.language.clone(), Theme::dimmed()));
    }
    lines.push(Line::from(meta));
    lines.push(Line::from(""));

    if let Some(url) = &movie.trailer_url {
        lines.push(Line::from(vec![
            Span::styled("▶ Trailer  ", Theme::accent()),
            Span::styled(truncate(url, width.saturating_sub(11)), Theme::link()),
        ]));
    }
    if let Some(url) = &movie.watch_url {
        lines.push(Line::from(vec![
            Span::styled("↗ Watch    ", Theme::accent()),
            Span::styled(truncate(url, width.saturating_sub(11)), Theme::link()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("▼ ", Theme::keybind()),
        Span::styled("d", Theme::keybind()),
        Span::styled(" details", Theme::keybind_desc()),
    ]));

    lines
}

pub fn render(buf: &mut Buffer, area: Rect, movie: &Movie) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Theme::border())
        .style(Theme::text());

    let inner = block.inner(area);
    block.render(area, buf);

    let inner = Rect {
        x: inner.x + 2,
        width: inner.width.saturating_sub(4),
        ..inner
    };

    let content = lines(movie, inner.width as usize);
    let height = (content.len() as u16).min(inner.height);
    let area = Rect {
        y: inner.y + inner.height - height,
        height,
        ..inner
    };

    Paragraph::new(content).render(area, buf);
}
