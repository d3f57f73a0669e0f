//! ASCII name logo for the hero and splash screens.

use ratatui::prelude::*;

/// Block-letter rendering of "QASIM".
const QASIM_BLOCK: &[&str] = &[
    "█▀█ █▀█ █▀▀ █ █▀▄▀█",
    "▀▀█ █▀█ ▄▄█ █ █ ▀ █",
];

/// Builds the name logo as styled lines, sized to the available width.
///
/// Wide areas get the block letters under a plain "Hi, I'm" lead-in;
/// narrow areas fall back to the plain name.
pub fn name_logo_lines(width: u16) -> Vec<Line<'static>> {
    let theme = crate::theme::get_theme();

    if width >= 24 {
        vec![
            Line::from(Span::styled(
                QASIM_BLOCK[0],
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                QASIM_BLOCK[1],
                Style::default().fg(theme.violet).add_modifier(Modifier::BOLD),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "MUHAMMAD QASIM",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ))]
    }
}
