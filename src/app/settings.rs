use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// View preferences read from an optional `settings.json`.
///
/// The editor only reads this file; it never writes configuration back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

fn default_word_wrap() -> bool {
    true
}

fn default_font_size() -> u32 {
    14
}

fn default_window_width() -> i32 {
    800
}

fn default_window_height() -> i32 {
    600
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            line_numbers_enabled: false,
            word_wrap_enabled: default_word_wrap(),
            dark_mode: false,
            font_size: default_font_size(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory, falling back to defaults.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::Settings(format!("{}: {}", path.display(), e)))?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !(6..=72).contains(&self.font_size) {
            return Err(AppError::Settings(format!(
                "font size {} out of range 6..=72",
                self.font_size
            )));
        }
        if self.window_width < 200 || self.window_height < 150 {
            return Err(AppError::Settings(format!(
                "window size {}x{} too small",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("simple-text-editor");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(!settings.line_numbers_enabled);
        assert!(settings.word_wrap_enabled);
        assert!(!settings.dark_mode);
        assert_eq!(settings.font_size, 14);
        assert_eq!((settings.window_width, settings.window_height), (800, 600));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"dark_mode": true}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.font_size, 14);
        assert!(settings.word_wrap_enabled);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"line_numbers_enabled": true, "font_size": 18}"#).unwrap();

        let settings = AppSettings::load_from(&path).unwrap();
        assert!(settings.line_numbers_enabled);
        assert_eq!(settings.font_size, 18);
    }

    #[test]
    fn test_load_from_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(AppError::Json(_))));
    }

    #[test]
    fn test_load_from_rejects_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"font_size": 400}"#).unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(AppError::Settings(_))));
    }

    #[test]
    fn test_config_path_file_name() {
        let path = AppSettings::get_config_path();
        assert!(path.ends_with("simple-text-editor/settings.json"));
    }
}
