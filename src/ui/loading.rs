//! Full-area spinner shown while the first movie loads

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::Theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

pub fn render(frame: &mut Frame, area: Rect, tick: u64) {
    let y = area.y + area.height.saturating_sub(3) / 2;
    let area = Rect {
        y,
        height: area.height.min(3),
        ..area
    };

    let text = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(spinner_frame(tick), Theme::loading()),
            Span::styled(" Loading movie…", Theme::loading()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Finding recommendations", Theme::dimmed())),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}
