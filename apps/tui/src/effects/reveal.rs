//! One-shot entrance effects for sections crossing the reveal threshold.
//!
//! Each section animates exactly once, the first time enough of it is on
//! screen; the revealed set in the tracker gates re-triggering.

use ratatui::prelude::*;
use tachyonfx::{fx, pattern::RadialPattern, CellFilter, Effect, Interpolation, Motion};

use folio_core::Section;

use super::create_timer;

/// Creates the entrance effect for a section, clipped to its on-screen
/// area.
///
/// The hero dissolves into place; content sections slide up from below,
/// mirroring the original translateY entrance.
pub fn create_section_reveal(section: Section, area: Rect, duration_ms: u64) -> Effect {
    let theme = crate::theme::get_theme();
    let effect = match section {
        Section::Home => fx::dissolve(create_timer(duration_ms, Interpolation::QuadInOut))
            .with_pattern(RadialPattern::center()),
        _ => fx::slide_in(
            Motion::DownToUp,
            5, // gradient_length
            0, // randomness
            theme.bg_primary,
            create_timer(duration_ms, Interpolation::QuadOut),
        ),
    };
    effect.with_filter(CellFilter::Area(area))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_builds_for_every_section() {
        // Construction must not panic for any section or for zero-size areas.
        let area = Rect::new(0, 0, 80, 12);
        for section in Section::ALL {
            let _ = create_section_reveal(section, area, 400);
            let _ = create_section_reveal(section, Rect::new(0, 0, 0, 0), 0);
        }
    }
}
