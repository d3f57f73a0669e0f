//! Folio Core - domain model for the terminal portfolio.
//!
//! This crate provides everything the front end needs that is not
//! presentation: the fixed section list, the static content catalogs,
//! viewport visibility tracking, navigation state, and the resume
//! download.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Navigation, Section, ViewportTracker};
//!
//! let mut tracker = ViewportTracker::new();
//! tracker.register_all(&Section::ALL);
//! tracker.observe(Section::Projects, 0.4);
//! assert!(tracker.is_revealed(Section::Projects));
//!
//! let mut nav = Navigation::new();
//! let request = nav.navigate_to("projects", &Section::ALL);
//! assert!(request.is_some());
//! ```

pub mod catalog;
pub mod error;
pub mod nav;
pub mod resume;
pub mod section;
pub mod viewport;

pub use catalog::{
    Certification, ExperienceEntry, FooterLink, Profile, Project, Skill, SkillCategory, skills_in,
};
pub use error::{FolioError, Result};
pub use nav::{Navigation, ScrollRequest};
pub use section::Section;
pub use viewport::{REVEAL_RATIO, SCROLL_THRESHOLD, ViewportTracker};
