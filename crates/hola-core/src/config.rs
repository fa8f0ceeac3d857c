//! Window and appearance settings for Hola

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub window: WindowSettings,
    pub appearance: AppearanceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub font_size: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Rust GUI - Hola Mundo".to_string(),
            width: 600.0,
            height: 450.0,
        }
    }
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: 15.0,
        }
    }
}

impl AppSettings {
    /// Get the settings file path
    pub fn settings_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("hola");
        path.push("settings.json");
        path
    }

    /// Load settings from the default location
    pub async fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::settings_path()).await
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub async fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                let settings = serde_json::from_str(&contents)?;
                tracing::debug!("Loaded settings from: {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.window.width, 600.0);
        assert_eq!(settings.window.height, 450.0);
        assert_eq!(settings.appearance.theme, Theme::Dark);
        assert!(AppSettings::settings_path().ends_with("hola/settings.json"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"appearance": {"theme": "light"}}"#).unwrap();
        assert_eq!(settings.appearance.theme, Theme::Light);
        assert_eq!(settings.appearance.font_size, 15.0);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn test_theme_from_dark() {
        assert_eq!(Theme::from_dark(true), Theme::Dark);
        assert_eq!(Theme::from_dark(false), Theme::Light);
        assert!(!Theme::Light.is_dark());
    }

    #[tokio::test]
    async fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("settings.json"))
            .await
            .unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"window": {"title": "Hola", "width": 800.0, "height": 600.0}}"#,
        )
        .unwrap();

        let settings = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(settings.window.title, "Hola");
        assert_eq!(settings.window.width, 800.0);
        assert_eq!(settings.appearance, AppearanceSettings::default());
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppSettings::load_from(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
