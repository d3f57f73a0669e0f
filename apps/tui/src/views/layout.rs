//! Global layout structure for the TUI application.
//!
//! Three-tier layout:
//! - Nav bar (fixed, height 2): brand and section links
//! - Page area (flexible): the scrollable portfolio
//! - Status footer (fixed, height 2): active section and key hints

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::components::{NAV_BAR_HEIGHT, STATUS_FOOTER_HEIGHT};

/// Global layout structure for the TUI.
pub struct GlobalLayout;

impl GlobalLayout {
    /// Creates the base three-tier vertical layout.
    pub fn create(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAV_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_FOOTER_HEIGHT),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tiers_fill_the_area() {
        let [nav, page, footer] = GlobalLayout::create(Rect::new(0, 0, 100, 40));
        assert_eq!(nav.height, NAV_BAR_HEIGHT);
        assert_eq!(footer.height, STATUS_FOOTER_HEIGHT);
        assert_eq!(page.height, 40 - NAV_BAR_HEIGHT - STATUS_FOOTER_HEIGHT);
    }
}
