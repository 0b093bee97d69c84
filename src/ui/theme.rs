//! Cinema theme for Cineplex
//!
//! Color palette and style helpers for the TUI: a dark auditorium
//! background with marquee-gold highlights.

use ratatui::style::{Color, Modifier, Style};

/// Cinema color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0b0d10 (auditorium black)
    pub const BACKGROUND: Color = Color::Rgb(0x0b, 0x0d, 0x10);

    /// Primary: #f5c518 (marquee gold)
    pub const PRIMARY: Color = Color::Rgb(0xf5, 0xc5, 0x18);

    /// Secondary: #ff4d5e (velvet red)
    pub const SECONDARY: Color = Color::Rgb(0xff, 0x4d, 0x5e);

    /// Accent: #7dd3fc (projector blue)
    pub const ACCENT: Color = Color::Rgb(0x7d, 0xd3, 0xfc);

    /// Text: #e8e6e3 (screen white)
    pub const TEXT: Color = Color::Rgb(0xe8, 0xe6, 0xe3);

    /// Dim: #6b7280 (muted grey)
    pub const DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);

    /// Success: #4ade80 (green)
    pub const SUCCESS: Color = Color::Rgb(0x4a, 0xde, 0x80);

    /// Warning: #fbbf24 (amber)
    pub const WARNING: Color = Color::Rgb(0xfb, 0xbf, 0x24);

    /// Error: #f43f5e (red)
    pub const ERROR: Color = Color::Rgb(0xf4, 0x3f, 0x5e);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Panels, header and footer
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x15, 0x18, 0x1d);

    /// Selected tiles and chips
    pub const BACKGROUND_HOVER: Color = Color::Rgb(0x1f, 0x23, 0x2a);

    pub const BORDER: Color = Color::Rgb(0x3a, 0x3f, 0x47);

    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Highlighted text (inverted with primary color)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Big movie title in the hero banner
    pub fn hero_title() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    /// Small uppercase label above the hero title
    pub fn category() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // COMPONENT STYLES
    // ═══════════════════════════════════════════════════════════════════════

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn input_cursor() -> Style {
        Style::default().fg(Self::BACKGROUND).bg(Self::PRIMARY)
    }

    /// Placeholder text inside empty inputs
    pub fn placeholder() -> Style {
        Style::default().fg(Self::DIM).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Loading/spinner indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Year/date metadata
    pub fn year() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Genre chips
    pub fn genre() -> Style {
        Style::default().fg(Self::ACCENT).bg(Self::BACKGROUND_HOVER)
    }

    pub fn duration() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Section headings on the details panel
    pub fn label() -> Style {
        Style::default()
            .fg(Self::DIM)
            .add_modifier(Modifier::BOLD)
    }

    /// Clickable links (trailer, watch)
    pub fn link() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Recommendation tile, normal state
    pub fn tile() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Recommendation tile or suggestion chip, selected state
    pub fn tile_selected() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::BACKGROUND_HOVER)
            .add_modifier(Modifier::BOLD)
    }

    /// Rating color by score (0-10)
    pub fn rating(score: f32) -> Style {
        if score >= 7.5 {
            Self::success()
        } else if score >= 6.0 {
            Self::warning()
        } else if score > 0.0 {
            Self::error()
        } else {
            Self::dimmed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // WCAG contrast helpers used to check the palette

    /// Calculate relative luminance for a color (used in contrast ratio)
    /// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
    fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
        fn channel_luminance(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
    }

    /// Calculate contrast ratio between two colors
    /// Returns a value between 1 (same color) and 21 (black/white)
    /// WCAG AA requires >= 4.5:1 for normal text, >= 3:1 for large text
    fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
        let l1 = relative_luminance(fg.0, fg.1, fg.2);
        let l2 = relative_luminance(bg.0, bg.1, bg.2);

        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

        (lighter + 0.05) / (darker + 0.05)
    }

    /// Check if a foreground/background pair meets WCAG AA for normal text
    fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
        contrast_ratio(fg, bg) >= 4.5
    }

    /// Check if a foreground/background pair meets WCAG AA for large text
    fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
        contrast_ratio(fg, bg) >= 3.0
    }

    /// Extract RGB tuple from ratatui Color (only works for Rgb variant)
    fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
        match color {
            Color::Rgb(r, g, b) => Some((r, g, b)),
            _ => None,
        }
    }

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_text_contrast_against_background() {
        let bg = rgb(Theme::BACKGROUND);
        let text = rgb(Theme::TEXT);

        let ratio = contrast_ratio(text, bg);
        assert!(
            meets_wcag_aa(text, bg),
            "Text on background should meet WCAG AA (got {:.2}:1)",
            ratio
        );
    }

    #[test]
    fn test_text_contrast_inside_panels() {
        // Tiles and inputs draw text on the lighter panel colors
        for panel in [Theme::BACKGROUND_LIGHT, Theme::BACKGROUND_HOVER] {
            let ratio = contrast_ratio(rgb(Theme::TEXT), rgb(panel));
            assert!(ratio >= 4.5, "Text on panel contrast {:.2}:1", ratio);
        }
    }

    #[test]
    fn test_accent_colors_readable() {
        let bg = rgb(Theme::BACKGROUND);
        for (name, color) in [
            ("PRIMARY", Theme::PRIMARY),
            ("SECONDARY", Theme::SECONDARY),
            ("ACCENT", Theme::ACCENT),
            ("SUCCESS", Theme::SUCCESS),
            ("WARNING", Theme::WARNING),
            ("ERROR", Theme::ERROR),
        ] {
            let ratio = contrast_ratio(rgb(color), bg);
            assert!(
                meets_wcag_aa_large(rgb(color), bg),
                "{} on background should meet WCAG AA large (got {:.2}:1)",
                name,
                ratio
            );
        }
    }

    #[test]
    fn test_inverted_highlighted_contrast() {
        let ratio = contrast_ratio(rgb(Theme::BACKGROUND), rgb(Theme::PRIMARY));
        assert!(ratio >= 3.0, "Inverted highlight contrast {:.2}:1", ratio);
    }

    #[test]
    fn test_rating_style_thresholds() {
        assert_eq!(Theme::rating(8.4), Theme::success());
        assert_eq!(Theme::rating(6.5), Theme::warning());
        assert_eq!(Theme::rating(3.2), Theme::error());
        assert_eq!(Theme::rating(0.0), Theme::dimmed());
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn test_contrast_ratio_same_color() {
        let ratio = contrast_ratio((100, 100, 100), (100, 100, 100));
        assert!((ratio - 1.0).abs() < 0.001);
    }
}
