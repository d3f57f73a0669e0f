//! Sticky nav bar: brand, section links, compact-menu hint.
//!
//! The bar restyles once the page scrolls past the fold, mirroring the
//! original's translucent-to-solid switch.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use folio_core::{Navigation, Section};

use crate::icons::Icons;

/// Terminals narrower than this get the hamburger hint instead of inline
/// links.
pub const NARROW_WIDTH: u16 = 80;

/// Rows the nav bar occupies (content + separator).
pub const NAV_BAR_HEIGHT: u16 = 2;

const BRAND: &str = "<Muhammad Qasim />";

/// Renders the nav bar.
///
/// `highlighted` is the keyboard-highlighted item index (the hover
/// analog); the active item comes from the navigation state.
pub fn render_nav_bar(
    frame: &mut Frame,
    area: Rect,
    nav: &Navigation,
    highlighted: usize,
    scrolled: bool,
) {
    let theme = crate::theme::get_theme();
    let narrow = area.width < NARROW_WIDTH;

    let mut spans = vec![Span::styled(
        BRAND,
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )];

    let right: Vec<Span> = if narrow {
        vec![Span::styled(
            format!("{} Menu [m]", Icons::MENU),
            Style::default().fg(if nav.menu_open() { theme.primary } else { theme.text_muted }),
        )]
    } else {
        let mut items = Vec::new();
        for (i, section) in Section::ALL.iter().enumerate() {
            let label = format!(" {} ", section.title());
            let style = if nav.active() == *section {
                Style::default()
                    .fg(theme.primary)
                    .bg(theme.bg_element)
                    .add_modifier(Modifier::BOLD)
            } else if highlighted == i {
                Style::default().fg(theme.text).bg(theme.bg_element)
            } else {
                Style::default().fg(theme.text_muted)
            };
            items.push(Span::styled(label, style));
            if i + 1 < Section::ALL.len() {
                items.push(Span::raw(" "));
            }
        }
        items
    };

    // Right-align the links after the brand.
    let brand_width = BRAND.width() as u16;
    let right_width: u16 = right.iter().map(|span| span.content.width() as u16).sum();
    let filler = area
        .width
        .saturating_sub(brand_width + right_width + 2);
    spans.push(Span::raw(" ".repeat(filler as usize)));
    spans.extend(right);

    // Past the fold the bar gets a panel background and an accent rule.
    let (bg, border_fg) = if scrolled {
        (theme.bg_panel, theme.border_active)
    } else {
        (theme.bg_primary, theme.border_subtle)
    };

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(bg))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(border_fg)),
        );
    frame.render_widget(bar, area);
}
