//! Skills section: per-category groups with level gauges.

use ratatui::{prelude::*, widgets::{Paragraph, Widget}};

use folio_core::catalog::{skills_in, SkillCategory};
use folio_core::Section;

use crate::components::render_skill_gauge;

use super::{content_width, content_x, render_section_header, HEADER_ROWS};

pub fn height(_width: u16) -> u16 {
    // Category label plus one gauge row per skill, with a spacer after
    // each group.
    let groups: u16 = SkillCategory::ALL
        .iter()
        .map(|&category| 1 + skills_in(category).count() as u16 + 1)
        .sum();
    HEADER_ROWS + groups
}

pub fn render(buf: &mut Buffer, area: Rect, revealed: bool) {
    let theme = crate::theme::get_theme();
    let cw = content_width(area.width);
    let cx = area.x + content_x(area.width);

    let header_area = Rect::new(cx, area.y, cw, area.height);
    let body = render_section_header(buf, header_area, Section::Skills, revealed);

    let mut y = body.y;
    let bottom = body.y + body.height;
    for category in SkillCategory::ALL {
        if y >= bottom {
            break;
        }
        let accent = theme.category_accent(category);
        let label_fg = if revealed { accent } else { theme.text_dim };
        Paragraph::new(Line::from(Span::styled(
            category.label().to_uppercase(),
            Style::default().fg(label_fg).add_modifier(Modifier::BOLD),
        )))
        .render(Rect::new(body.x, y, body.width, 1), buf);
        y += 1;

        for skill in skills_in(category) {
            if y >= bottom {
                break;
            }
            render_skill_gauge(
                buf,
                Rect::new(body.x, y, body.width, 1),
                skill,
                accent,
                revealed,
            );
            y += 1;
        }
        y += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::catalog::SKILLS;

    #[test]
    fn test_height_counts_every_skill() {
        let expected = HEADER_ROWS + SKILLS.len() as u16 + SkillCategory::ALL.len() as u16 * 2;
        assert_eq!(height(100), expected);
    }

    #[test]
    fn test_render_shows_category_labels() {
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
        assert!(content.contains("FRONTEND"));
        assert!(content.contains("BACKEND"));
        assert!(content.contains("DATABASE"));
    }
}
