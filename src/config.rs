//! Field defaults persistence
//!
//! Stores field defaults in `~/.config/textfield/textfield.yaml`. Every key
//! is optional; missing keys take the built-in defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Defaults applied to newly created text fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Cursor blink half-period
    pub blink_interval_ms: u64,
    /// Interval between repeated navigation keystrokes
    pub key_repeat_interval_ms: u64,
    /// Max gap between mouse-ups counted as one multi-click
    pub click_interval_ms: u64,
    /// How far the pointer may stray outside a pressed field before the
    /// press is cancelled
    pub boundary_threshold: f32,
    pub preferred_width: f32,
    pub password_char: char,
    /// Tab moves focus to the next field
    pub focus_traversal: bool,
    /// Reject typed/pasted characters the font cannot render
    pub only_font_chars: bool,
    /// Enter inserts a newline
    pub write_enters: bool,
    /// Programmatic text updates are dropped while the field has focus
    pub ignore_updates_while_focused: bool,
    /// Programmatic edits raise change notifications
    pub programmatic_change_events: bool,
    /// Length cap in characters (absent = unbounded)
    pub max_length: Option<usize>,
    /// Style id resolved through `style::load_style`
    pub style: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: 500,
            key_repeat_interval_ms: 200,
            click_interval_ms: 200,
            boundary_threshold: 100.0,
            preferred_width: 150.0,
            password_char: '*',
            focus_traversal: true,
            only_font_chars: true,
            write_enters: false,
            ignore_updates_while_focused: true,
            programmatic_change_events: false,
            max_length: None,
            style: "default-dark".to_string(),
        }
    }
}

impl FieldConfig {
    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    pub fn key_repeat_interval(&self) -> Duration {
        Duration::from_millis(self.key_repeat_interval_ms)
    }

    pub fn click_interval(&self) -> Duration {
        Duration::from_millis(self.click_interval_ms)
    }
}
