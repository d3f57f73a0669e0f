//! The fixed named regions of the page.

use std::fmt;

/// One of the fixed page sections, in the order they appear on the page.
///
/// The set is known at compile time; sections are never created or
/// destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Home,
    Experience,
    Projects,
    Certifications,
    Skills,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Experience,
        Self::Projects,
        Self::Certifications,
        Self::Skills,
        Self::Contact,
    ];

    /// Stable lowercase identifier ("home", "projects", ...).
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Display title, as shown in the nav bar and section headers.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Section header subtitle. The hero section has no header.
    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Experience => Some("Professional Journey"),
            Self::Projects => Some("What I've Built"),
            Self::Certifications => Some("Credentials & Achievements"),
            Self::Skills => Some("Technologies I Work With"),
            Self::Contact => Some("Let's Work Together"),
        }
    }

    /// Case-insensitive lookup against the section identifiers.
    ///
    /// Unknown names resolve to `None`; navigation treats that as a silent
    /// no-op rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Section::from_name("Projects"), Some(Section::Projects));
        assert_eq!(Section::from_name("projects"), Some(Section::Projects));
        assert_eq!(Section::from_name("PROJECTS"), Some(Section::Projects));
        assert_eq!(Section::from_name("  home  "), Some(Section::Home));
    }

    #[test]
    fn test_from_name_unknown_is_none() {
        assert_eq!(Section::from_name("Unknown"), None);
        assert_eq!(Section::from_name(""), None);
    }

    #[test]
    fn test_all_is_in_page_order() {
        assert_eq!(Section::ALL[0], Section::Home);
        assert_eq!(Section::ALL[5], Section::Contact);
        assert_eq!(Section::ALL.len(), 6);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }
}
