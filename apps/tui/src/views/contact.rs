//! Contact section with the footer links and copyright.

use ratatui::{prelude::*, widgets::{Paragraph, Widget}};

use folio_core::catalog::{FOOTER_LINKS, PROFILE};
use folio_core::Section;

use crate::icons::Icons;

use super::{content_width, content_x, render_section_header, HEADER_ROWS};

fn blurb_line_count(width: u16) -> u16 {
    let wrap_width = usize::from(content_width(width).max(16));
    textwrap::wrap(PROFILE.contact_blurb, wrap_width).len() as u16
}

pub fn height(width: u16) -> u16 {
    // blurb + spacer + email + spacer + connect label + links + spacer
    // + copyright + bottom margin
    HEADER_ROWS + blurb_line_count(width) + 1 + 1 + 1 + 1 + FOOTER_LINKS.len() as u16 + 1 + 1 + 1
}

pub fn render(buf: &mut Buffer, area: Rect, revealed: bool) {
    let theme = crate::theme::get_theme();
    let cw = content_width(area.width);
    let cx = area.x + content_x(area.width);

    let header_area = Rect::new(cx, area.y, cw, area.height);
    let body = render_section_header(buf, header_area, Section::Contact, revealed);

    let text_fg = if revealed { theme.text_muted } else { theme.text_dim };
    let mut lines = Vec::new();
    let wrap_width = usize::from(cw.max(16));
    for wrapped in textwrap::wrap(PROFILE.contact_blurb, wrap_width) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(text_fg),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} Say Hello", Icons::MAIL),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(PROFILE.email, Style::default().fg(theme.secondary)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Connect",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )));
    for link in &FOOTER_LINKS {
        lines.push(Line::from(vec![
            Span::styled(Icons::HEX, Style::default().fg(theme.violet)),
            Span::raw(" "),
            Span::styled(link.label, Style::default().fg(text_fg)),
            Span::raw("  "),
            Span::styled(link.href, Style::default().fg(theme.text_dim)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        PROFILE.copyright,
        Style::default().fg(theme.text_dim),
    )));

    let list_height = (lines.len() as u16).min(body.height);
    Paragraph::new(lines).render(Rect::new(body.x, body.y, body.width, list_height), buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_covers_links_and_copyright() {
        assert!(height(100) > HEADER_ROWS + FOOTER_LINKS.len() as u16);
    }

    #[test]
    fn test_render_shows_contact_email_and_links() {
        let area = Rect::new(0, 0, 100, height(100));
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, true);

        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    content.push_str(cell.symbol());
                }
            }
        }
        assert!(content.contains(PROFILE.email));
        for link in &FOOTER_LINKS {
            assert!(content.contains(link.label), "missing {}", link.label);
        }
    }
}
