//! Certifications section, plus the resume download banner.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use folio_core::catalog::{CERTIFICATIONS, PROFILE};
use folio_core::Section;

use crate::icons::Icons;

use super::{content_width, content_x, render_section_header, HEADER_ROWS};

fn blurb_line_count(width: u16) -> u16 {
    let wrap_width = usize::from(content_width(width).saturating_sub(4).max(16));
    textwrap::wrap(PROFILE.resume_blurb, wrap_width).len() as u16
}

fn banner_height(width: u16) -> u16 {
    // heading + blurb + blank + action, inside borders
    3 + blurb_line_count(width) + 2
}

pub fn height(width: u16) -> u16 {
    // Three rows per certification entry (two lines + spacer).
    HEADER_ROWS + CERTIFICATIONS.len() as u16 * 3 + banner_height(width) + 1
}

pub fn render(buf: &mut Buffer, area: Rect, revealed: bool) {
    let theme = crate::theme::get_theme();
    let cw = content_width(area.width);
    let cx = area.x + content_x(area.width);

    let header_area = Rect::new(cx, area.y, cw, area.height);
    let body = render_section_header(buf, header_area, Section::Certifications, revealed);

    let mut lines = Vec::new();
    for cert in &CERTIFICATIONS {
        let title_fg = if revealed { theme.text } else { theme.text_dim };
        lines.push(Line::from(vec![
            Span::styled(Icons::DIAMOND, Style::default().fg(theme.violet)),
            Span::raw(" "),
            Span::styled(cert.title, Style::default().fg(title_fg).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} · {}", cert.issuer, cert.date),
                Style::default().fg(theme.text_muted),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} Verified", Icons::CHECK),
                Style::default().fg(theme.success),
            ),
        ]));
        lines.push(Line::from(""));
    }
    let list_height = (lines.len() as u16).min(body.height);
    Paragraph::new(lines).render(Rect::new(body.x, body.y, body.width, list_height), buf);

    // Resume banner below the list.
    let banner_h = banner_height(area.width);
    if body.height < list_height + banner_h {
        return;
    }
    let banner_area = Rect::new(body.x, body.y + list_height, cw, banner_h);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if revealed { theme.violet } else { theme.border_subtle }))
        .style(Style::default().bg(theme.bg_panel));
    let inner = block.inner(banner_area);
    block.render(banner_area, buf);

    let mut banner_lines = vec![Line::from(Span::styled(
        "Want to see more?",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ))];
    let wrap_width = usize::from(inner.width.saturating_sub(2).max(16));
    for wrapped in textwrap::wrap(PROFILE.resume_blurb, wrap_width) {
        banner_lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(theme.text_muted),
        )));
    }
    banner_lines.push(Line::from(""));
    banner_lines.push(Line::from(Span::styled(
        format!("[d] {} Download Resume", Icons::DOWNLOAD),
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )));

    Paragraph::new(banner_lines)
        .wrap(Wrap { trim: false })
        .render(
            Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
            buf,
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_includes_banner() {
        assert!(height(100) > HEADER_ROWS + CERTIFICATIONS.len() as u16 * 3);
    }

    #[test]
    fn test_render_lists_every_certification() {
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
        for cert in &CERTIFICATIONS {
            assert!(content.contains(cert.issuer), "missing {}", cert.issuer);
        }
        assert!(content.contains("Want to see more?"));
    }
}
