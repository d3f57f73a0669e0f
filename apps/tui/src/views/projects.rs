//! Projects section: one card per project.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use folio_core::catalog::{Project, PROJECTS};
use folio_core::Section;

use super::{content_width, content_x, render_section_header, HEADER_ROWS};

fn desc_line_count(project: &Project, width: u16) -> u16 {
    let wrap_width = usize::from(content_width(width).saturating_sub(4).max(16));
    textwrap::wrap(project.desc, wrap_width).len() as u16
}

fn card_height(project: &Project, width: u16) -> u16 {
    // title + blank + description + blank + tags, inside borders
    4 + desc_line_count(project, width) + 2
}

pub fn height(width: u16) -> u16 {
    let cards: u16 = PROJECTS
        .iter()
        .map(|project| card_height(project, width) + 1)
        .sum();
    HEADER_ROWS + cards + 1
}

pub fn render(buf: &mut Buffer, area: Rect, revealed: bool) {
    let theme = crate::theme::get_theme();
    let cw = content_width(area.width);
    let cx = area.x + content_x(area.width);

    let header_area = Rect::new(cx, area.y, cw, area.height);
    let mut body = render_section_header(buf, header_area, Section::Projects, revealed);

    for (index, project) in PROJECTS.iter().enumerate() {
        let card_h = card_height(project, area.width);
        if body.height < card_h {
            break;
        }
        let card_area = Rect::new(body.x, body.y, cw, card_h);
        let accent = theme.project_accent(index);

        let border_fg = if revealed { accent } else { theme.border_subtle };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_fg))
            .style(Style::default().bg(theme.bg_panel));
        let inner = block.inner(card_area);
        block.render(card_area, buf);

        let title_fg = if revealed { accent } else { theme.text_dim };
        let mut lines = vec![
            Line::from(Span::styled(
                project.title,
                Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        let wrap_width = usize::from(inner.width.saturating_sub(2).max(16));
        for wrapped in textwrap::wrap(project.desc, wrap_width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(theme.text_muted),
            )));
        }
        lines.push(Line::from(""));
        let mut tag_spans = Vec::new();
        for (i, tag) in project.tags.iter().enumerate() {
            tag_spans.push(Span::styled(
                format!("[{}]", tag),
                Style::default().fg(theme.text_dim),
            ));
            if i + 1 < project.tags.len() {
                tag_spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(tag_spans));

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
    fn test_height_covers_all_cards() {
        let h = height(100);
        let sum: u16 = PROJECTS.iter().map(|p| card_height(p, 100) + 1).sum();
        assert_eq!(h, HEADER_ROWS + sum + 1);
    }

    #[test]
    fn test_render_shows_every_project_title() {
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
        for project in &PROJECTS {
            assert!(content.contains(project.title), "missing {}", project.title);
        }
    }
}
