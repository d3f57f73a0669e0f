//! Integration tests for the app's navigation and reveal behavior.

use crossterm::event::{KeyCode, KeyModifiers};

use folio_core::{Section, REVEAL_RATIO};
use folio_tui::app::App;
use folio_tui::config::TuiConfig;
use folio_tui::views::PageMetrics;

fn app_with_page(width: u16, viewport_height: u16) -> App {
    let mut app = App::new(TuiConfig::default());
    app.metrics = Some(PageMetrics::compute(width, viewport_height));
    app
}

#[test]
fn test_app_starts_on_home() {
    let app = App::new(TuiConfig::default());
    assert!(!app.should_quit);
    assert_eq!(app.nav.active(), Section::Home);
    assert!(!app.nav.menu_open());
    assert_eq!(app.highlighted_nav, 0);
}

#[test]
fn test_navigate_to_projects_scrolls_and_activates() {
    let mut app = app_with_page(100, 40);
    app.navigate_to("Projects");

    assert_eq!(app.nav.active(), Section::Projects);
    assert!(app.scroll.is_animating());
}

#[test]
fn test_navigate_to_unknown_changes_nothing() {
    let mut app = app_with_page(100, 40);
    app.navigate_to("Unknown");

    assert_eq!(app.nav.active(), Section::Home);
    assert!(!app.scroll.is_animating());
}

#[test]
fn test_scrolling_the_page_reveals_sections_monotonically() {
    let mut app = app_with_page(100, 40);
    let metrics = app.metrics.clone().unwrap();

    // Walk the whole page one viewport at a time.
    let mut offset = 0u16;
    loop {
        for extent in &metrics.extents {
            let ratio = metrics.intersection_ratio(extent, offset);
            app.tracker.observe(extent.section, ratio);
        }
        if offset >= metrics.max_scroll() {
            break;
        }
        offset = (offset + metrics.viewport_height).min(metrics.max_scroll());
    }

    for section in Section::ALL {
        assert!(app.tracker.is_revealed(section), "{} never revealed", section);
    }

    // Scrolling back to the top removes nothing.
    for extent in &metrics.extents {
        app.tracker.observe(extent.section, metrics.intersection_ratio(extent, 0));
    }
    assert_eq!(app.tracker.revealed_count(), Section::ALL.len());
}

#[test]
fn test_reveal_threshold_matches_contract() {
    let mut app = app_with_page(100, 40);
    app.tracker.observe(Section::Skills, REVEAL_RATIO - 0.01);
    assert!(!app.tracker.is_revealed(Section::Skills));

    app.tracker.observe(Section::Skills, REVEAL_RATIO);
    assert!(app.tracker.is_revealed(Section::Skills));
}

#[test]
fn test_menu_open_then_navigate_always_closes() {
    let mut app = app_with_page(60, 40);

    app.handle_key(KeyCode::Char('m'), KeyModifiers::NONE);
    assert!(app.nav.menu_open());

    app.handle_key(KeyCode::Char('6'), KeyModifiers::NONE);
    assert!(!app.nav.menu_open());
    assert_eq!(app.nav.active(), Section::Contact);
}

#[test]
fn test_scrolled_flag_follows_offset() {
    let mut app = app_with_page(100, 40);

    app.tracker.set_scroll_offset(40);
    assert!(!app.tracker.scrolled());

    app.tracker.set_scroll_offset(60);
    assert!(app.tracker.scrolled());

    app.tracker.set_scroll_offset(10);
    assert!(!app.tracker.scrolled());
}
