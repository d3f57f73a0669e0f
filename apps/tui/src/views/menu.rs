//! Compact-menu overlay for narrow terminals.
//!
//! The terminal counterpart of the original's full-screen mobile menu:
//! opened from the hamburger hint, closed by Esc or any navigation.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use folio_core::{Navigation, Section};

/// Renders the overlay and returns `(backdrop_area, menu_area)` for
/// animation targeting.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    nav: &Navigation,
    highlighted: usize,
) -> (Rect, Rect) {
    let theme = crate::theme::get_theme();

    // Dimmed backdrop over the whole page.
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    let menu_height = Section::ALL.len() as u16 + 4;
    let menu_width = 30.min(area.width.saturating_sub(4));
    let menu_area = Rect {
        x: area.x + (area.width.saturating_sub(menu_width)) / 2,
        y: area.y + (area.height.saturating_sub(menu_height)) / 2,
        width: menu_width,
        height: menu_height.min(area.height),
    };

    let mut lines = vec![Line::from("")];
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if nav.active() == *section {
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
        } else if highlighted == i {
            Style::default().fg(theme.text).bg(theme.bg_element)
        } else {
            Style::default().fg(theme.text_muted)
        };
        lines.push(Line::from(Span::styled(
            format!("{}  {}", i + 1, section.title()),
            style,
        )));
    }

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_active))
                .title(Span::styled(
                    " Navigate ",
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(theme.bg_panel)),
        );
    frame.render_widget(menu, menu_area);

    (area, menu_area)
}
