//! Recommendation grid
//!
//! Fixed-width tiles flowing left to right; the selected tile gets a gold
//! border. The section is omitted entirely when there is nothing to show.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::models::Recommendation;
use crate::ui::text::truncate;
use crate::ui::Theme;

pub const TILE_WIDTH: u16 = 28;
pub const TILE_HEIGHT: u16 = 5;

/// Tiles per row at the given section width
pub fn columns(width: u16) -> usize {
    (width.saturating_sub(2) / TILE_WIDTH).max(1) as usize
}

/// Rows the section needs, 0 when there are no recommendations
pub fn height(count: usize, width: u16) -> u16 {
    if count == 0 {
        return 0;
    }
    let rows = u16::try_from(count.div_ceil(columns(width))).unwrap_or(u16::MAX);
    rows.saturating_mul(TILE_HEIGHT).saturating_add(2)
}

fn tile_lines(rec: &Recommendation, width: usize) -> Vec<Line<'static>> {
    let mut meta = Vec::new();
    if !rec.year.is_empty() {
        meta.push(Span::styled(rec.year.clone(), Theme::year()));
        meta.push(Span::styled(" • ", Theme::dimmed()));
    }
    meta.push(Span::styled(format!("★ {:.1}", rec.rating), Theme::rating(rec.rating)));

    let footer = match (rec.similarity, rec.preferred_image()) {
        (Some(similarity), _) => Span::styled(format!("{:.1}% match", similarity), Theme::accent()),
        (None, Some(_)) => Span::styled("▣ image", Theme::dimmed()),
        (None, None) => Span::styled("no image", Theme::dimmed()),
    };

    vec![
        Line::from(Span::styled(truncate(&rec.title, width), Theme::hero_title())),
        Line::from(meta),
        Line::from(footer),
    ]
}

pub fn render(buf: &mut Buffer, area: Rect, recommendations: &[Recommendation], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" RECOMMENDED MOVIES ", Theme::title()))
        .title_bottom(Span::styled(" ←→ select  ↵ open ", Theme::keybind_desc()))
        .style(Theme::text());

    let inner = block.inner(area);
    block.render(area, buf);

    let columns = columns(area.width);
    for (i, rec) in recommendations.iter().enumerate() {
        let col = (i % columns) as u16;
        let row = u16::try_from(i / columns).unwrap_or(u16::MAX);
        let tile = Rect {
            x: inner.x + col * TILE_WIDTH,
            y: inner.y.saturating_add(row.saturating_mul(TILE_HEIGHT)),
            width: TILE_WIDTH.min(inner.width),
            height: TILE_HEIGHT,
        };
        if tile.bottom() > inner.bottom() {
            break;
        }

        let is_selected = i == selected;
        let tile_block = Block::default()
            .borders(Borders::ALL)
            .border_type(if is_selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(if is_selected {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .style(if is_selected {
                Theme::tile_selected()
            } else {
                Theme::tile()
            });

        let content_area = tile_block.inner(tile);
        tile_block.render(tile, buf);
        Paragraph::new(tile_lines(rec, content_area.width as usize)).render(content_area, buf);
    }
}
