//! Compact-menu transition effects.

use ratatui::prelude::*;
use tachyonfx::{fx, CellFilter, Effect, Interpolation};

use super::create_timer;

/// Creates the open animation for the compact-menu overlay: a backdrop
/// fade with the menu items fading in slightly behind it.
pub fn create_menu_open_animation(backdrop_area: Rect, menu_area: Rect, duration_ms: u64) -> Effect {
    let backdrop_effect = fx::fade_from_fg(
        Color::Black,
        create_timer(duration_ms, Interpolation::QuadOut),
    )
    .with_filter(CellFilter::Area(backdrop_area));

    let menu_effect = fx::fade_from_fg(
        Color::Black,
        create_timer(duration_ms + 100, Interpolation::QuadOut),
    )
    .with_filter(CellFilter::Area(menu_area));

    fx::parallel(&[backdrop_effect, menu_effect])
}
