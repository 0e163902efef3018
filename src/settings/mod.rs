// src/settings/mod.rs
pub mod io;

use bevy::log::{error, warn};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cross::NumeralScript;

pub const DEFAULT_FONT_SCALE: u32 = 100;
pub const MIN_FONT_SCALE: u32 = 50;
pub const MAX_FONT_SCALE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

/// User preferences persisted between runs.
#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default = "default_font_scale")]
    pub font_scale_percent: u32,
    #[serde(default)]
    pub numeral_script: NumeralScript,
    /// Optional font added as a fallback so Urdu digits render.
    #[serde(default)]
    pub urdu_font_path: Option<PathBuf>,
}

fn default_font_scale() -> u32 {
    DEFAULT_FONT_SCALE
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            font_scale_percent: DEFAULT_FONT_SCALE,
            numeral_script: NumeralScript::default(),
            urdu_font_path: None,
        }
    }
}

pub fn clamp_font_scale(percent: u32) -> u32 {
    percent.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
}

impl AppSettings {
    /// Brings hand-edited values back into range.
    pub fn sanitized(mut self) -> Self {
        self.font_scale_percent = clamp_font_scale(self.font_scale_percent);
        self
    }

    pub fn set_font_scale(&mut self, percent: u32) {
        self.font_scale_percent = clamp_font_scale(percent);
    }

    pub fn zoom_factor(&self) -> f32 {
        self.font_scale_percent as f32 / 100.0
    }
}

/// Startup load. Unreadable settings are logged and replaced by defaults.
pub fn load_or_default() -> AppSettings {
    match io::load_settings_from_file::<AppSettings>() {
        Ok(settings) => settings.sanitized(),
        Err(e) => {
            warn!("AppSettings unreadable ({}). Using defaults.", e);
            AppSettings::default()
        }
    }
}

/// Saves after a UI change; failures are only logged.
pub fn persist(settings: &AppSettings) {
    if let Err(e) = io::save_settings_to_file(settings) {
        error!("Failed to save app settings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(settings.font_scale_percent, DEFAULT_FONT_SCALE);
        assert_eq!(settings.numeral_script, NumeralScript::Urdu);
        assert!(settings.urdu_font_path.is_none());
    }

    #[test]
    fn font_scale_is_clamped() {
        let mut settings = AppSettings::default();
        settings.set_font_scale(10);
        assert_eq!(settings.font_scale_percent, MIN_FONT_SCALE);
        settings.set_font_scale(999);
        assert_eq!(settings.font_scale_percent, MAX_FONT_SCALE);

        let loaded: AppSettings = serde_json::from_str(r#"{ "font_scale_percent": 5 }"#).unwrap();
        assert_eq!(loaded.sanitized().font_scale_percent, MIN_FONT_SCALE);
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled().as_str(), "light");
    }
}
