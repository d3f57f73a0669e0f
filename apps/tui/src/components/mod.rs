//! Reusable UI components.

mod logo;
mod nav_bar;
mod skill_gauge;
mod status_footer;
mod toast;

pub use logo::name_logo_lines;
pub use nav_bar::{render_nav_bar, NARROW_WIDTH, NAV_BAR_HEIGHT};
pub use skill_gauge::render_skill_gauge;
pub use status_footer::{render_status_footer, STATUS_FOOTER_HEIGHT};
pub use toast::{render_toasts_with_areas, Toast, ToastManager, ToastVariant};
