//! Splash screen shown briefly at startup.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::components::name_logo_lines;

/// Render the splash screen.
pub fn render_splash(frame: &mut Frame, area: Rect, message: &str) {
    let theme = crate::theme::get_theme();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(8),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mut lines = vec![Line::from(""), Line::from("")];
    lines.extend(name_logo_lines(area.width));
    lines.push(Line::from(Span::styled(
        "━━━━━━━━━━━━",
        Style::default().fg(theme.primary),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.text_muted),
    )));

    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(splash, chunks[1]);
}
