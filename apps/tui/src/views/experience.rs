//! Experience section: the professional timeline card.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use folio_core::catalog::EXPERIENCE;
use folio_core::Section;

use super::{content_width, content_x, render_section_header, HEADER_ROWS};

const CARD_PADDING: u16 = 2;

fn summary_line_count(width: u16) -> u16 {
    let wrap_width = usize::from(content_width(width).saturating_sub(2 * CARD_PADDING).max(16));
    EXPERIENCE
        .iter()
        .map(|entry| textwrap::wrap(entry.summary, wrap_width).len() as u16)
        .sum()
}

fn card_height(width: u16) -> u16 {
    // role + company + blank + summary + blank + tags, inside borders
    5 + summary_line_count(width) + 2
}

pub fn height(width: u16) -> u16 {
    HEADER_ROWS + EXPERIENCE.len() as u16 * (card_height(width) + 1) + 1
}

pub fn render(buf: &mut Buffer, area: Rect, revealed: bool) {
    let theme = crate::theme::get_theme();
    let cw = content_width(area.width);
    let cx = area.x + content_x(area.width);

    let header_area = Rect::new(cx, area.y, cw, area.height);
    let mut body = render_section_header(buf, header_area, Section::Experience, revealed);

    for entry in &EXPERIENCE {
        let card_h = card_height(area.width).min(body.height);
        if card_h < 4 {
            break;
        }
        let card_area = Rect::new(body.x, body.y, cw, card_h);

        let border_fg = if revealed { theme.border_active } else { theme.border_subtle };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_fg))
            .style(Style::default().bg(theme.bg_panel));
        let inner = block.inner(card_area);
        block.render(card_area, buf);

        let title_fg = if revealed { theme.text } else { theme.text_dim };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    entry.role,
                    Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(entry.period, Style::default().fg(theme.secondary)),
            ]),
            Line::from(Span::styled(entry.company, Style::default().fg(theme.primary))),
            Line::from(""),
        ];
        let wrap_width = usize::from(inner.width.saturating_sub(2).max(16));
        for wrapped in textwrap::wrap(entry.summary, wrap_width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(theme.text_muted),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            entry.tags.join(" · "),
            Style::default().fg(theme.text_dim),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(
                Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
                buf,
            );

        body = Rect::new(
            body.x,
            body.y + card_h + 1,
            body.width,
            body.height.saturating_sub(card_h + 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_grows_when_narrow() {
        // Narrower columns wrap the summary into more lines.
        assert!(height(40) > height(120));
    }

    #[test]
    fn test_render_shows_role_and_company() {
        let area = Rect::new(0, 0, 90, height(90));
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
        assert!(content.contains("Frontend Developer Intern"));
        assert!(content.contains("Appverse Technologies"));
    }
}
