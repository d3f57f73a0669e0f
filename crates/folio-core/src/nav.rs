//! Navigation state: active section and the compact-menu flag.

use tracing::debug;

use crate::section::Section;

/// A request to smoothly scroll the viewport to a section's container.
///
/// Produced by [`Navigation::navigate_to`]; the front end fulfils it by
/// animating the scroll offset to the section's top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: Section,
}

/// Holds the currently active nav item and whether the compact menu is
/// open.
///
/// Exactly one section is active at a time; the default is Home. The
/// active item is updated only by explicit navigation actions, never by
/// scroll position.
#[derive(Debug)]
pub struct Navigation {
    active: Section,
    menu_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            active: Section::Home,
            menu_open: false,
        }
    }

    /// Currently active nav item.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Whether the compact menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Toggles the compact menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the compact menu without navigating.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Handles a "navigate to section" request.
    ///
    /// The name is matched case-insensitively against the section
    /// identifiers, and the target must have a rendered container. Unknown
    /// or unrendered targets leave all state untouched and surface no
    /// error. On success the target becomes active, the compact menu is
    /// closed regardless of its prior state, and a [`ScrollRequest`] for
    /// the target is returned.
    pub fn navigate_to(&mut self, name: &str, rendered: &[Section]) -> Option<ScrollRequest> {
        let target = Section::from_name(name)?;
        if !rendered.contains(&target) {
            return None;
        }

        self.active = target;
        self.menu_open = false;
        debug!(section = target.id(), "navigating to section");
        Some(ScrollRequest { target })
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let nav = Navigation::new();
        assert_eq!(nav.active(), Section::Home);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_navigate_sets_active_and_clears_menu() {
        let mut nav = Navigation::new();
        nav.toggle_menu();
        assert!(nav.menu_open());

        let request = nav.navigate_to("Projects", &Section::ALL);
        assert_eq!(
            request,
            Some(ScrollRequest {
                target: Section::Projects
            })
        );
        assert_eq!(nav.active(), Section::Projects);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_navigate_clears_menu_even_when_already_closed() {
        let mut nav = Navigation::new();
        assert!(!nav.menu_open());

        nav.navigate_to("contact", &Section::ALL);
        assert!(!nav.menu_open());
        assert_eq!(nav.active(), Section::Contact);
    }

    #[test]
    fn test_navigate_unknown_is_a_no_op() {
        let mut nav = Navigation::new();
        nav.toggle_menu();

        let request = nav.navigate_to("Unknown", &Section::ALL);
        assert!(request.is_none());
        assert_eq!(nav.active(), Section::Home);
        assert!(nav.menu_open());
    }

    #[test]
    fn test_navigate_unrendered_is_a_no_op() {
        let mut nav = Navigation::new();
        let rendered = [Section::Home, Section::Contact];

        let request = nav.navigate_to("Projects", &rendered);
        assert!(request.is_none());
        assert_eq!(nav.active(), Section::Home);
    }

    #[test]
    fn test_navigate_is_case_insensitive() {
        let mut nav = Navigation::new();
        let request = nav.navigate_to("SKILLS", &Section::ALL);
        assert_eq!(
            request,
            Some(ScrollRequest {
                target: Section::Skills
            })
        );
    }

    #[test]
    fn test_toggle_menu_flips() {
        let mut nav = Navigation::new();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }
}
