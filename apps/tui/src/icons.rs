//! Glyphs and visual indicators for the TUI.

/// Unicode glyphs used across the views.
pub struct Icons;

impl Icons {
    /// Skill / certification marker
    pub const DIAMOND: &'static str = "◈";

    /// Footer link marker
    pub const HEX: &'static str = "⬡";

    /// Email
    pub const MAIL: &'static str = "✉";

    /// Resume download
    pub const DOWNLOAD: &'static str = "↓";

    /// Availability status dot
    pub const DOT: &'static str = "●";

    /// Compact-menu (hamburger) indicator
    pub const MENU: &'static str = "≡";

    /// Success / verified
    pub const CHECK: &'static str = "✓";

    /// Failure
    pub const CROSS: &'static str = "✗";

    /// Info
    pub const INFO: &'static str = "ℹ";

    /// Warning
    pub const WARNING: &'static str = "⚠";

    /// Scroll hint
    pub const SCROLL: &'static str = "▼";
}

/// ASCII alternatives for terminals that don't support Unicode.
pub struct AsciiIcons;

impl AsciiIcons {
    pub const DIAMOND: &'static str = "*";
    pub const HEX: &'static str = "o";
    pub const MAIL: &'static str = "@";
    pub const DOWNLOAD: &'static str = "v";
    pub const DOT: &'static str = "*";
    pub const MENU: &'static str = "=";
    pub const CHECK: &'static str = "[+]";
    pub const CROSS: &'static str = "[x]";
    pub const INFO: &'static str = "[i]";
    pub const WARNING: &'static str = "[!]";
    pub const SCROLL: &'static str = "v";
}
