//! Page sections and supporting views.

pub mod certifications;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod layout;
pub mod menu;
pub mod page;
pub mod projects;
pub mod skills;
pub mod splash;

pub use layout::GlobalLayout;
pub use menu::render_menu;
pub use page::{render_page, PageMetrics, SectionExtent};
pub use splash::render_splash;

use ratatui::prelude::*;

use folio_core::Section;

/// Rows consumed by a section header (title, subtitle, rule, spacer).
pub(crate) const HEADER_ROWS: u16 = 4;

/// Readable content width for a given page width.
pub(crate) fn content_width(width: u16) -> u16 {
    width.saturating_sub(6).clamp(20, 88)
}

/// Left edge that centers the content column.
pub(crate) fn content_x(width: u16) -> u16 {
    (width.saturating_sub(content_width(width))) / 2
}

/// Builds the standard section header lines.
pub(crate) fn section_header_lines(section: Section, revealed: bool) -> Vec<Line<'static>> {
    let theme = crate::theme::get_theme();
    let (title_fg, rule_fg) = if revealed {
        (theme.text, theme.primary)
    } else {
        (theme.text_dim, theme.border_subtle)
    };

    let mut lines = vec![Line::from(Span::styled(
        section.title().to_string(),
        Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = section.subtitle() {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(theme.text_muted),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "━━━━━━━━━━━━".to_string(),
        Style::default().fg(rule_fg),
    )));
    lines.push(Line::from(""));
    lines
}

/// Renders the standard header at the top of a section area and returns
/// the remaining rows.
pub(crate) fn render_section_header(buf: &mut Buffer, area: Rect, section: Section, revealed: bool) -> Rect {
    use ratatui::widgets::{Paragraph, Widget};

    if area.height < HEADER_ROWS {
        return Rect::new(area.x, area.y, area.width, 0);
    }
    let header_area = Rect::new(area.x, area.y, area.width, HEADER_ROWS);
    Paragraph::new(section_header_lines(section, revealed)).render(header_area, buf);

    Rect::new(
        area.x,
        area.y + HEADER_ROWS,
        area.width,
        area.height - HEADER_ROWS,
    )
}
