//! Color theme system for the Folio TUI.
//!
//! The dark default carries the portfolio's palette: indigo primary,
//! emerald secondary, violet accent on a near-black page background.

use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use ratatui::style::Color;

use folio_core::catalog::SkillCategory;

use crate::config::{CustomColors, TuiConfig};

/// Folio TUI color theme.
#[derive(Debug, Clone)]
pub struct FolioTheme {
    // Brand colors
    pub primary: Color,
    pub secondary: Color,
    pub violet: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Text colors
    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,

    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_element: Color,

    // Border colors
    pub border: Color,
    pub border_active: Color,
    pub border_subtle: Color,
}

impl Default for FolioTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl FolioTheme {
    /// The portfolio palette on a dark page.
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(0x63, 0x66, 0xf1),
            secondary: Color::Rgb(0x10, 0xb9, 0x81),
            violet: Color::Rgb(0x8b, 0x5c, 0xf6),
            success: Color::Rgb(0x10, 0xb9, 0x81),
            warning: Color::Rgb(0xf5, 0x9e, 0x0b),
            error: Color::Rgb(0xef, 0x44, 0x44),
            info: Color::Rgb(0x60, 0xa5, 0xfa),
            text: Color::Rgb(0xe2, 0xe2, 0xe8),
            text_muted: Color::Rgb(0xa0, 0xa0, 0xb0),
            text_dim: Color::Rgb(0x5a, 0x5a, 0x6e),
            bg_primary: Color::Rgb(0x0a, 0x0a, 0x0f),
            bg_panel: Color::Rgb(0x12, 0x12, 0x1a),
            bg_element: Color::Rgb(0x1a, 0x1a, 0x24),
            border: Color::Rgb(0x23, 0x23, 0x2e),
            border_active: Color::Rgb(0x63, 0x66, 0xf1),
            border_subtle: Color::Rgb(0x1c, 0x1c, 0x26),
        }
    }

    /// Light preset for pale terminals.
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(0x4f, 0x46, 0xe5),
            secondary: Color::Rgb(0x05, 0x96, 0x69),
            violet: Color::Rgb(0x7c, 0x3a, 0xed),
            success: Color::Rgb(0x05, 0x96, 0x69),
            warning: Color::Rgb(0xd9, 0x77, 0x06),
            error: Color::Rgb(0xdc, 0x26, 0x26),
            info: Color::Rgb(0x25, 0x63, 0xeb),
            text: Color::Rgb(0x1f, 0x1f, 0x28),
            text_muted: Color::Rgb(0x52, 0x52, 0x60),
            text_dim: Color::Rgb(0x8a, 0x8a, 0x98),
            bg_primary: Color::Rgb(0xfa, 0xfa, 0xfc),
            bg_panel: Color::Rgb(0xf0, 0xf0, 0xf4),
            bg_element: Color::Rgb(0xe6, 0xe6, 0xec),
            border: Color::Rgb(0xd4, 0xd4, 0xdc),
            border_active: Color::Rgb(0x4f, 0x46, 0xe5),
            border_subtle: Color::Rgb(0xe2, 0xe2, 0xe8),
        }
    }

    /// Parse hex color string to RGB Color.
    ///
    /// Accepts formats: "#RRGGBB" or "RRGGBB"
    fn parse_hex_color(hex: &str) -> Result<Color> {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 {
            return Err(anyhow::anyhow!("Invalid hex color length: {}", hex));
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .with_context(|| format!("Invalid red component in hex color: {}", hex))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .with_context(|| format!("Invalid green component in hex color: {}", hex))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .with_context(|| format!("Invalid blue component in hex color: {}", hex))?;

        Ok(Color::Rgb(r, g, b))
    }

    /// Resolve a theme from configuration.
    pub fn from_config(config: &TuiConfig) -> Self {
        match config.theme.preset.as_str() {
            "light" => Self::light(),
            "custom" => {
                if let Some(ref colors) = config.theme.colors {
                    Self::from_custom_colors(colors).unwrap_or_else(|e| {
                        eprintln!("Warning: Failed to load custom theme: {}. Using default.", e);
                        Self::dark()
                    })
                } else {
                    eprintln!("Warning: Custom preset selected but no colors defined. Using default.");
                    Self::dark()
                }
            }
            _ => Self::dark(),
        }
    }

    /// Create theme from custom colors, starting from the dark base.
    fn from_custom_colors(colors: &CustomColors) -> Result<Self> {
        let mut theme = Self::dark();

        if let Some(ref hex) = colors.primary {
            theme.primary = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.secondary {
            theme.secondary = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.violet {
            theme.violet = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.success {
            theme.success = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.warning {
            theme.warning = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.error {
            theme.error = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.info {
            theme.info = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.text {
            theme.text = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.text_muted {
            theme.text_muted = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.text_dim {
            theme.text_dim = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.bg_primary {
            theme.bg_primary = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.bg_panel {
            theme.bg_panel = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.bg_element {
            theme.bg_element = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.border {
            theme.border = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.border_active {
            theme.border_active = Self::parse_hex_color(hex)?;
        }
        if let Some(ref hex) = colors.border_subtle {
            theme.border_subtle = Self::parse_hex_color(hex)?;
        }

        Ok(theme)
    }

    /// Accent color for a skill category, matching the original palette
    /// (indigo / emerald / violet).
    pub fn category_accent(&self, category: SkillCategory) -> Color {
        match category {
            SkillCategory::Frontend => self.primary,
            SkillCategory::Backend => self.secondary,
            SkillCategory::Database => self.violet,
        }
    }

    /// Accent color for a project card by position.
    pub fn project_accent(&self, index: usize) -> Color {
        match index % 3 {
            0 => self.primary,
            1 => self.secondary,
            _ => self.violet,
        }
    }
}

/// Global theme instance (set once at startup, swappable on reload).
static THEME_INSTANCE: OnceLock<Mutex<FolioTheme>> = OnceLock::new();

fn theme_instance() -> &'static Mutex<FolioTheme> {
    THEME_INSTANCE.get_or_init(|| Mutex::new(FolioTheme::default()))
}

/// Get the current theme (thread-safe).
pub fn get_theme() -> FolioTheme {
    theme_instance().lock().unwrap().clone()
}

/// Replace the global theme (startup and config reload).
pub fn update_theme(theme: FolioTheme) {
    *theme_instance().lock().unwrap() = theme;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = FolioTheme::parse_hex_color("#6366f1").unwrap();
        assert_eq!(color, Color::Rgb(0x63, 0x66, 0xf1));

        let color = FolioTheme::parse_hex_color("10b981").unwrap();
        assert_eq!(color, Color::Rgb(0x10, 0xb9, 0x81));
    }

    #[test]
    fn test_parse_hex_color_rejects_bad_input() {
        assert!(FolioTheme::parse_hex_color("#fff").is_err());
        assert!(FolioTheme::parse_hex_color("zzzzzz").is_err());
    }

    #[test]
    fn test_category_accents_are_distinct() {
        let theme = FolioTheme::dark();
        let accents = [
            theme.category_accent(SkillCategory::Frontend),
            theme.category_accent(SkillCategory::Backend),
            theme.category_accent(SkillCategory::Database),
        ];
        assert_ne!(accents[0], accents[1]);
        assert_ne!(accents[1], accents[2]);
        assert_ne!(accents[0], accents[2]);
    }

    #[test]
    fn test_project_accent_cycles() {
        let theme = FolioTheme::dark();
        assert_eq!(theme.project_accent(0), theme.project_accent(3));
    }
}
