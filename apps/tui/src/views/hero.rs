//! Hero section: availability badge, name, role, bio, call-to-action.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use folio_core::catalog::PROFILE;

use crate::components::name_logo_lines;
use crate::icons::Icons;

use super::content_width;

const MIN_HEIGHT: u16 = 16;
const BIO_WIDTH: u16 = 62;

/// The hero fills the first viewport, like the original's 100vh cover.
pub fn height(viewport_height: u16) -> u16 {
    viewport_height.max(MIN_HEIGHT)
}

fn bio_lines(width: u16) -> Vec<String> {
    let wrap_width = content_width(width).min(BIO_WIDTH) as usize;
    textwrap::wrap(PROFILE.bio, wrap_width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

pub fn render(buf: &mut Buffer, area: Rect, revealed: bool) {
    let theme = crate::theme::get_theme();
    let text_fg = if revealed { theme.text } else { theme.text_dim };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(Icons::DOT, Style::default().fg(theme.secondary)),
            Span::raw(" "),
            Span::styled(PROFILE.availability, Style::default().fg(theme.secondary)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Hi, I'm", Style::default().fg(text_fg))),
    ];
    lines.extend(name_logo_lines(area.width));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        PROFILE.role,
        Style::default().fg(theme.text_muted),
    )));
    lines.push(Line::from(""));
    for bio in bio_lines(area.width) {
        lines.push(Line::from(Span::styled(bio, Style::default().fg(theme.text_dim))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[3] View My Work", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
        Span::raw("    "),
        Span::styled(
            format!("[d] {} Download Resume", Icons::DOWNLOAD),
            Style::default().fg(theme.violet),
        ),
    ]));

    // Center the block vertically in the section.
    let block_height = lines.len() as u16;
    let y = area.y + area.height.saturating_sub(block_height) / 2;
    let block_area = Rect::new(area.x, y, area.width, block_height.min(area.height));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(block_area, buf);

    // Scroll indicator pinned near the bottom edge.
    if area.height > block_height + 2 {
        let hint_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        Paragraph::new(Line::from(Span::styled(
            format!("{} scroll", Icons::SCROLL),
            Style::default().fg(theme.text_dim),
        )))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_tracks_viewport() {
        assert_eq!(height(40), 40);
        assert_eq!(height(8), MIN_HEIGHT);
    }

    #[test]
    fn test_render_includes_availability_badge() {
        let area = Rect::new(0, 0, 80, 24);
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
        assert!(content.contains("Available"));
        assert!(content.contains("Hi, I'm"));
    }
}
