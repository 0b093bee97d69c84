//! Movie details panel
//!
//! Release date, runtime, description, cast and genre chips. The panel is
//! rendered into the scrollable page, so its height is computed up front
//! from the wrapped content.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::models::Movie;
use crate::ui::text::{truncate, wrap};
use crate::ui::Theme;

/// Left/right padding inside the panel border
const PADDING: u16 = 2;

/// Cast entries shown before "+N more"
const MAX_CAST: usize = 8;

fn content_width(width: u16) -> usize {
    width.saturating_sub(2 + PADDING * 2).max(1) as usize
}

fn section(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(label, Theme::label()))
}

/// Lines of the panel body, already wrapped to `width` columns
pub fn lines(movie: &Movie, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let release = movie
        .release_date
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());
    let runtime = match movie.runtime_label() {
        r if r.is_empty() => "Unknown".to_string(),
        r => r,
    };
    lines.push(Line::from(vec![
        Span::styled("Release Date  ", Theme::label()),
        Span::styled(release, Theme::year()),
        Span::raw("    "),
        Span::styled("Runtime  ", Theme::label()),
        Span::styled(runtime, Theme::duration()),
    ]));
    lines.push(Line::from(""));

    lines.push(section("DESCRIPTION"));
    if movie.overview.trim().is_empty() {
        lines.push(Line::from(Span::styled("No description available.", Theme::dimmed())));
    } else {
        lines.extend(
            wrap(&movie.overview, width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Theme::text()))),
        );
    }

    if !movie.cast.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("CAST"));
        for member in movie.cast.iter().take(MAX_CAST) {
            let entry = truncate(&member.to_string(), width.saturating_sub(2));
            lines.push(Line::from(vec![
                Span::styled("• ", Theme::accent()),
                Span::styled(entry, Theme::text()),
            ]));
        }
        if movie.cast.len() > MAX_CAST {
            lines.push(Line::from(Span::styled(
                format!("  +{} more", movie.cast.len() - MAX_CAST),
                Theme::dimmed(),
            )));
        }
    }

    if !movie.genres.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("GENRES"));

        // Chips flow onto as many rows as needed
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for genre in &movie.genres {
            let chip = format!(" {} ", genre);
            let chip_width = unicode_width::UnicodeWidthStr::width(chip.as_str());
            if used > 0 && used + 1 + chip_width > width {
                lines.push(Line::from(std::mem::take(&mut row)));
                used = 0;
            }
            if used > 0 {
                row.push(Span::raw(" "));
                used += 1;
            }
            row.push(Span::styled(chip, Theme::genre()));
            used += chip_width;
        }
        lines.push(Line::from(row));
    }

    if let Some(poster) = &movie.poster {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Poster  ", Theme::label()),
            Span::styled(truncate(poster, width.saturating_sub(8)), Theme::dimmed()),
        ]));
    }

    lines
}

/// Rows the panel needs at `width`, borders included
pub fn height(movie: &Movie, width: u16) -> u16 {
    u16::try_from(lines(movie, content_width(width)).len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

pub fn render(buf: &mut Buffer, area: Rect, movie: &Movie) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" DETAILS ", Theme::title()))
        .style(Theme::text());

    let inner = block.inner(area);
    block.render(area, buf);

    let inner = Rect {
        x: inner.x + PADDING,
        width: inner.width.saturating_sub(PADDING * 2),
        ..inner
    };

    Paragraph::new(lines(movie, content_width(area.width))).render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CastMember;

    fn movie() -> Movie {
        serde_json::from_str(
            r#"{
                "id": 27205,
                "title": "Inception",
                "overview": "A thief who steals corporate secrets through the use of dream-sharing technology.",
                "genres": ["Action", "Science Fiction", "Adventure"],
                "runtime": 148,
                "release_date": "2010-07-15"
            }"#,
        )
        .unwrap()
    }

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_details_content() {
        let text = text_of(&lines(&movie(), 60));
        assert!(text.contains("2010-07-15"));
        assert!(text.contains("148 min"));
        assert!(text.contains("DESCRIPTION"));
        assert!(text.contains(" Science Fiction "));
        assert!(!text.contains("CAST"));
    }

    #[test]
    fn test_unknown_fields() {
        let mut movie = movie();
        movie.release_date = None;
        movie.runtime = None;
        movie.overview.clear();
        let text = text_of(&lines(&movie, 60));
        assert!(text.contains("Release Date  Unknown"));
        assert!(text.contains("Runtime  Unknown"));
        assert!(text.contains("No description available."));
    }

    #[test]
    fn test_cast_is_capped() {
        let mut movie = movie();
        movie.cast = (0..10)
            .map(|i| CastMember {
                name: format!("Actor {}", i),
                character: format!("Role {}", i),
                profile_path: None,
            })
            .collect();
        let text = text_of(&lines(&movie, 60));
        assert!(text.contains("Actor 0 as Role 0"));
        assert!(!text.contains("Actor 9"));
        assert!(text.contains("+2 more"));
    }

    #[test]
    fn test_height_grows_when_narrow() {
        let movie = movie();
        assert!(height(&movie, 30) > height(&movie, 120));
    }

    #[test]
    fn test_height_saturates_for_long_overview() {
        let mut movie = movie();
        movie.overview = "word ".repeat(70_000);
        assert_eq!(height(&movie, 4), u16::MAX);
    }
}
