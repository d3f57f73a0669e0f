//! Single-row skill gauge: name, level bar, percentage.

use ratatui::{
    prelude::*,
    widgets::{Gauge, Widget},
};

use folio_core::catalog::Skill;

use crate::icons::Icons;

const NAME_COLUMN: u16 = 16;

/// Renders one skill row into the page buffer.
///
/// Until the skills section is revealed the bar stays empty, so the fill
/// reads as part of the section's entrance.
pub fn render_skill_gauge(buf: &mut Buffer, area: Rect, skill: &Skill, accent: Color, revealed: bool) {
    if area.height == 0 || area.width <= NAME_COLUMN + 6 {
        return;
    }
    let theme = crate::theme::get_theme();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(NAME_COLUMN), Constraint::Min(6)])
        .split(area);

    let name_fg = if revealed { theme.text } else { theme.text_dim };
    let name = Line::from(vec![
        Span::styled(Icons::DIAMOND, Style::default().fg(accent)),
        Span::raw(" "),
        Span::styled(skill.name, Style::default().fg(name_fg)),
    ]);
    buf.set_line(chunks[0].x, chunks[0].y, &name, chunks[0].width);

    let percent = if revealed { u16::from(skill.level) } else { 0 };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(theme.bg_element))
        .percent(percent)
        .label(format!("{}%", skill.level));
    gauge.render(chunks[1], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::catalog::SKILLS;

    #[test]
    fn test_gauge_renders_into_buffer() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        let theme = crate::theme::get_theme();
        render_skill_gauge(&mut buf, area, &SKILLS[0], theme.primary, true);

        let row: String = (0..10)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(row.contains('H'), "skill name missing from row: {row:?}");
    }

    #[test]
    fn test_gauge_tolerates_tiny_areas() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        let theme = crate::theme::get_theme();
        render_skill_gauge(&mut buf, area, &SKILLS[0], theme.primary, true);
    }
}
