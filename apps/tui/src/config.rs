//! TUI configuration management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use folio_core::resume::{RESUME_FILENAME, RESUME_URL};

/// TUI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Animation configuration
    #[serde(default)]
    pub animations: AnimationConfig,
    /// Resume download configuration
    #[serde(default)]
    pub resume: ResumeConfig,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme preset: "dark", "light", or "custom"
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Custom colors (only used if preset = "custom")
    #[serde(default)]
    pub colors: Option<CustomColors>,
}

/// Custom color configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub violet: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub text_dim: Option<String>,
    pub bg_primary: Option<String>,
    pub bg_panel: Option<String>,
    pub bg_element: Option<String>,
    pub border: Option<String>,
    pub border_active: Option<String>,
    pub border_subtle: Option<String>,
}

fn default_preset() -> String {
    "dark".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            colors: None,
        }
    }
}

/// Animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Whether animations are enabled (default: true)
    #[serde(default = "default_animations_enabled")]
    pub enabled: bool,
    /// Animation duration multiplier (default: 1.0)
    #[serde(default = "default_duration_multiplier")]
    pub duration_multiplier: f64,
    /// Whether to use reduced motion (default: false)
    #[serde(default = "default_reduced_motion")]
    pub reduced_motion: bool,
}

fn default_animations_enabled() -> bool {
    true
}

fn default_duration_multiplier() -> f64 {
    1.0
}

fn default_reduced_motion() -> bool {
    false
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_multiplier: 1.0,
            reduced_motion: false,
        }
    }
}

impl AnimationConfig {
    /// Whether any motion should play at all.
    pub fn active(&self) -> bool {
        self.enabled && !self.reduced_motion
    }

    /// Scales a base duration by the configured multiplier. Returns 0 when
    /// motion is off, so effects resolve to their final state immediately.
    pub fn scaled_ms(&self, base_ms: u64) -> u64 {
        if !self.active() {
            return 0;
        }
        (base_ms as f64 * self.duration_multiplier).round() as u64
    }
}

/// Resume download configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// Where the resume PDF is hosted
    #[serde(default = "default_resume_url")]
    pub url: String,
    /// Filename the saved resume is given
    #[serde(default = "default_resume_filename")]
    pub filename: String,
    /// Target directory override (default: the user's download directory)
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_resume_url() -> String {
    RESUME_URL.to_string()
}

fn default_resume_filename() -> String {
    RESUME_FILENAME.to_string()
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            url: default_resume_url(),
            filename: default_resume_filename(),
            directory: None,
        }
    }
}

impl ResumeConfig {
    /// Resolves the directory the resume is saved into: the configured
    /// override, else the user's download directory, else the home
    /// directory, else the current directory.
    pub fn target_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.directory {
            return PathBuf::from(dir);
        }
        dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            animations: AnimationConfig::default(),
            resume: ResumeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(".folio").join("config.toml"))
    }

    /// Load configuration from the default path, writing a commented
    /// default file on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file, with comments.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let mut toml = String::new();
        toml.push_str("# Folio configuration\n");
        toml.push_str("# This file allows you to customize the portfolio's appearance\n\n");

        toml.push_str("[theme]\n");
        toml.push_str("# Theme preset: \"dark\" (default), \"light\", or \"custom\"\n");
        toml.push_str(&format!("preset = \"{}\"\n\n", self.theme.preset));

        toml.push_str("[animations]\n");
        toml.push_str("# Whether animations are enabled (default: true)\n");
        toml.push_str(&format!("enabled = {}\n", self.animations.enabled));
        toml.push_str("# Animation duration multiplier (default: 1.0)\n");
        toml.push_str(&format!(
            "duration_multiplier = {}\n",
            self.animations.duration_multiplier
        ));
        toml.push_str("# Whether to use reduced motion (default: false)\n");
        toml.push_str(&format!("reduced_motion = {}\n\n", self.animations.reduced_motion));

        toml.push_str("[resume]\n");
        toml.push_str("# Where the resume PDF is fetched from\n");
        toml.push_str(&format!("url = \"{}\"\n", self.resume.url));
        toml.push_str("# Filename the saved resume is given\n");
        toml.push_str(&format!("filename = \"{}\"\n", self.resume.filename));
        toml.push_str("# Target directory (defaults to your download directory)\n");
        if let Some(ref dir) = self.resume.directory {
            toml.push_str(&format!("directory = \"{}\"\n", dir));
        } else {
            toml.push_str("# directory = \"/path/to/downloads\"\n");
        }

        if let Some(ref colors) = self.theme.colors {
            toml.push_str("\n# Custom colors (only used if preset = \"custom\")\n");
            toml.push_str("# Colors should be in hex format: \"#RRGGBB\"\n");
            toml.push_str("[theme.colors]\n");
            for (key, value) in [
                ("primary", &colors.primary),
                ("secondary", &colors.secondary),
                ("violet", &colors.violet),
                ("success", &colors.success),
                ("warning", &colors.warning),
                ("error", &colors.error),
                ("info", &colors.info),
                ("text", &colors.text),
                ("text_muted", &colors.text_muted),
                ("text_dim", &colors.text_dim),
                ("bg_primary", &colors.bg_primary),
                ("bg_panel", &colors.bg_panel),
                ("bg_element", &colors.bg_element),
                ("border", &colors.border),
                ("border_active", &colors.border_active),
                ("border_subtle", &colors.border_subtle),
            ] {
                if let Some(c) = value {
                    toml.push_str(&format!("{} = \"{}\"\n", key, c));
                }
            }
        }

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Reload configuration from file.
    pub fn reload() -> Result<Self> {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.theme.preset, "dark");
        assert!(config.animations.enabled);
        assert_eq!(config.resume.url, RESUME_URL);
        assert_eq!(config.resume.filename, RESUME_FILENAME);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let mut config = TuiConfig::default();
        config.theme.preset = "light".to_string();
        config.animations.enabled = false;
        config.resume.directory = Some("/tmp/resumes".to_string());
        config.save_to(&path).expect("save");

        let loaded = TuiConfig::load_from(&path).expect("load");
        assert_eq!(loaded.theme.preset, "light");
        assert!(!loaded.animations.enabled);
        assert_eq!(loaded.resume.directory.as_deref(), Some("/tmp/resumes"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\npreset = \"light\"\n").expect("write");

        let loaded = TuiConfig::load_from(&path).expect("load");
        assert_eq!(loaded.theme.preset, "light");
        assert!(loaded.animations.enabled);
        assert_eq!(loaded.resume.filename, RESUME_FILENAME);
    }

    #[test]
    fn test_scaled_ms_respects_motion_settings() {
        let mut animations = AnimationConfig::default();
        assert_eq!(animations.scaled_ms(400), 400);

        animations.duration_multiplier = 0.5;
        assert_eq!(animations.scaled_ms(400), 200);

        animations.reduced_motion = true;
        assert_eq!(animations.scaled_ms(400), 0);

        animations.reduced_motion = false;
        animations.enabled = false;
        assert_eq!(animations.scaled_ms(400), 0);
    }

    #[test]
    fn test_explicit_target_dir_wins() {
        let resume = ResumeConfig {
            directory: Some("/srv/files".to_string()),
            ..ResumeConfig::default()
        };
        assert_eq!(resume.target_dir(), PathBuf::from("/srv/files"));
    }
}
