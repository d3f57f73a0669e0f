//! Page geometry and the scrolled render of the portfolio.
//!
//! The page is one long column of sections. Each frame the section
//! extents are computed for the current width, every section's
//! intersection ratio with the viewport is reported to the tracker (the
//! terminal stand-in for an intersection observer), and the visible
//! window of an offscreen render is blitted to the frame.

use ratatui::{layout::Position, prelude::*};

use folio_core::{Section, ViewportTracker};

use super::{certifications, contact, experience, hero, projects, skills};

/// Blank rows between adjacent sections.
pub const SECTION_GAP: u16 = 1;

/// Row extent of one section within the page.
#[derive(Debug, Clone, Copy)]
pub struct SectionExtent {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

/// Row layout of the whole page at a given viewport size.
#[derive(Debug, Clone)]
pub struct PageMetrics {
    pub width: u16,
    pub viewport_height: u16,
    pub extents: Vec<SectionExtent>,
    pub total_height: u16,
}

impl PageMetrics {
    /// Computes section extents for the given viewport size.
    pub fn compute(width: u16, viewport_height: u16) -> Self {
        let mut extents = Vec::with_capacity(Section::ALL.len());
        let mut top = 0u16;
        for section in Section::ALL {
            let height = section_height(section, width, viewport_height);
            extents.push(SectionExtent { section, top, height });
            top = top.saturating_add(height).saturating_add(SECTION_GAP);
        }
        let total_height = top.saturating_sub(SECTION_GAP);
        Self {
            width,
            viewport_height,
            extents,
            total_height,
        }
    }

    /// Sections that currently have a rendered container.
    pub fn rendered_sections(&self) -> Vec<Section> {
        self.extents.iter().map(|extent| extent.section).collect()
    }

    /// Top row of a section's container, if rendered.
    pub fn section_top(&self, section: Section) -> Option<u16> {
        self.extents
            .iter()
            .find(|extent| extent.section == section)
            .map(|extent| extent.top)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.viewport_height)
    }

    /// Fraction of a section currently inside the viewport, relative to
    /// the section's own height.
    pub fn intersection_ratio(&self, extent: &SectionExtent, offset: u16) -> f32 {
        if extent.height == 0 {
            return 0.0;
        }
        let vp_top = offset;
        let vp_bottom = offset.saturating_add(self.viewport_height);
        let bottom = extent.top.saturating_add(extent.height);
        let visible = bottom.min(vp_bottom).saturating_sub(extent.top.max(vp_top));
        f32::from(visible) / f32::from(extent.height)
    }

    /// Screen-space rect of a section's visible part, for effect
    /// targeting. `page_area` is where the page is drawn on screen.
    pub fn visible_rect(&self, extent: &SectionExtent, offset: u16, page_area: Rect) -> Option<Rect> {
        let vp_bottom = offset.saturating_add(page_area.height);
        let bottom = extent.top.saturating_add(extent.height);
        let visible_top = extent.top.max(offset);
        let visible = bottom.min(vp_bottom).saturating_sub(visible_top);
        if visible == 0 {
            return None;
        }
        Some(Rect {
            x: page_area.x,
            y: page_area.y + (visible_top - offset),
            width: page_area.width,
            height: visible,
        })
    }
}

fn section_height(section: Section, width: u16, viewport_height: u16) -> u16 {
    match section {
        Section::Home => hero::height(viewport_height),
        Section::Experience => experience::height(width),
        Section::Projects => projects::height(width),
        Section::Certifications => certifications::height(width),
        Section::Skills => skills::height(width),
        Section::Contact => contact::height(width),
    }
}

fn render_section(section: Section, buf: &mut Buffer, area: Rect, revealed: bool) {
    match section {
        Section::Home => hero::render(buf, area, revealed),
        Section::Experience => experience::render(buf, area, revealed),
        Section::Projects => projects::render(buf, area, revealed),
        Section::Certifications => certifications::render(buf, area, revealed),
        Section::Skills => skills::render(buf, area, revealed),
        Section::Contact => contact::render(buf, area, revealed),
    }
}

/// Renders the page window at `offset`, feeding the tracker along the way.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    metrics: &PageMetrics,
    tracker: &mut ViewportTracker,
    offset: u16,
) {
    let theme = crate::theme::get_theme();

    tracker.set_scroll_offset(u32::from(offset));
    for extent in &metrics.extents {
        let ratio = metrics.intersection_ratio(extent, offset);
        tracker.observe(extent.section, ratio);
    }

    let page_area = Rect::new(0, 0, area.width, metrics.total_height);
    let mut page_buf = Buffer::empty(page_area);
    page_buf.set_style(page_area, Style::default().bg(theme.bg_primary).fg(theme.text));

    for extent in &metrics.extents {
        // Only sections overlapping the window need to be drawn.
        let visible = metrics
            .visible_rect(extent, offset, Rect::new(0, 0, area.width, area.height))
            .is_some();
        if !visible || extent.height == 0 {
            continue;
        }
        let rect = Rect::new(0, extent.top, area.width, extent.height);
        render_section(extent.section, &mut page_buf, rect, tracker.is_revealed(extent.section));
    }

    let buf = frame.buffer_mut();
    for y in 0..area.height {
        let src_y = offset.saturating_add(y);
        if src_y >= metrics.total_height {
            break;
        }
        for x in 0..area.width {
            if let Some(src) = page_buf.cell(Position::new(x, src_y)) {
                if let Some(dst) = buf.cell_mut(Position::new(area.x + x, area.y + y)) {
                    *dst = src.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents_are_ordered_and_gapped() {
        let metrics = PageMetrics::compute(100, 40);
        assert_eq!(metrics.extents.len(), Section::ALL.len());

        for pair in metrics.extents.windows(2) {
            assert_eq!(pair[1].top, pair[0].top + pair[0].height + SECTION_GAP);
        }
        let last = metrics.extents.last().unwrap();
        assert_eq!(metrics.total_height, last.top + last.height);
    }

    #[test]
    fn test_hero_fills_the_first_viewport() {
        let metrics = PageMetrics::compute(100, 40);
        assert_eq!(metrics.extents[0].section, Section::Home);
        assert_eq!(metrics.extents[0].top, 0);
        assert_eq!(metrics.extents[0].height, 40);
    }

    #[test]
    fn test_intersection_ratio_bounds() {
        let metrics = PageMetrics::compute(100, 40);
        let extent = SectionExtent {
            section: Section::Projects,
            top: 100,
            height: 20,
        };

        // Fully below the viewport.
        assert_eq!(metrics.intersection_ratio(&extent, 0), 0.0);
        // Fully inside.
        assert_eq!(metrics.intersection_ratio(&extent, 95), 1.0);
        // Half visible at the bottom edge.
        let ratio = metrics.intersection_ratio(&extent, 70);
        assert!((ratio - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tracker_reveals_only_visible_sections() {
        let metrics = PageMetrics::compute(100, 40);
        let mut tracker = ViewportTracker::new();
        tracker.register_all(&Section::ALL);

        for extent in &metrics.extents {
            tracker.observe(extent.section, metrics.intersection_ratio(extent, 0));
        }
        assert!(tracker.is_revealed(Section::Home));
        assert!(!tracker.is_revealed(Section::Contact));
    }

    #[test]
    fn test_max_scroll_clamps_to_content() {
        let metrics = PageMetrics::compute(100, 40);
        assert_eq!(
            metrics.max_scroll(),
            metrics.total_height - metrics.viewport_height
        );
        // The hero always fills the first viewport, so the page is never
        // shorter than one screen.
        assert!(metrics.total_height >= metrics.viewport_height);
    }

    #[test]
    fn test_visible_rect_clips_to_window() {
        let metrics = PageMetrics::compute(100, 40);
        let page_area = Rect::new(0, 2, 100, 40);
        let extent = SectionExtent {
            section: Section::Skills,
            top: 30,
            height: 20,
        };

        let rect = metrics.visible_rect(&extent, 0, page_area).unwrap();
        assert_eq!(rect.y, 2 + 30);
        assert_eq!(rect.height, 10);

        assert!(metrics.visible_rect(&extent, 60, page_area).is_none());
    }

    #[test]
    fn test_every_section_has_positive_height() {
        for width in [40u16, 80, 120] {
            let metrics = PageMetrics::compute(width, 30);
            for extent in &metrics.extents {
                assert!(extent.height > 0, "{:?} collapsed at width {}", extent.section, width);
            }
        }
    }
}
