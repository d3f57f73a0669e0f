//! Status footer: active section, reveal progress, key hints.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use folio_core::Section;

/// Rows the footer occupies (separator + hints).
pub const STATUS_FOOTER_HEIGHT: u16 = 2;

/// Renders the footer hint row.
pub fn render_status_footer(
    frame: &mut Frame,
    area: Rect,
    active: Section,
    revealed: usize,
    downloading: bool,
) {
    let theme = crate::theme::get_theme();

    let mut left = vec![
        Span::styled(
            format!(" {} ", active.title()),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {}/{} revealed ", revealed, Section::ALL.len()),
            Style::default().fg(theme.text_dim),
        ),
    ];
    if downloading {
        left.push(Span::styled(
            "· fetching resume... ",
            Style::default().fg(theme.info),
        ));
    }

    let hints = "[↑↓] Scroll  [←→] Highlight  [Enter] Go  [1-6] Jump  [d] Resume  [m] Menu  [q] Quit";
    let hints_width = hints.chars().count() as u16;
    let left_width: u16 = left.iter().map(|span| span.content.chars().count() as u16).sum();
    let filler = area.width.saturating_sub(left_width + hints_width);
    left.push(Span::raw(" ".repeat(filler as usize)));
    left.push(Span::styled(hints, Style::default().fg(theme.text_muted)));

    let footer = Paragraph::new(Line::from(left))
        .style(Style::default().bg(theme.bg_panel))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(footer, area);
}
