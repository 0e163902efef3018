// src/cli/prefs.rs
use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::cross::NumeralScript;
use crate::settings::{io, AppSettings, ThemePreference};

use super::CliError;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Print the stored preferences as JSON
    Show,
    /// Restore every preference to its default
    Reset,
    /// Set the color theme
    SetTheme { theme: ThemeArg },
    /// Set the font scale in percent (clamped to 50-200)
    SetFontScale { percent: u32 },
    /// Set the digit script: western or urdu
    SetScript { script: String },
    /// Set (or clear, when omitted) the font file used for Urdu digits
    SetUrduFont { path: Option<PathBuf> },
}

fn load(file: Option<&Path>) -> Result<AppSettings, CliError> {
    let settings: AppSettings = match file {
        Some(path) => io::load_settings_from_path(path)?,
        None => io::load_settings_from_file()?,
    };
    Ok(settings.sanitized())
}

fn save(file: Option<&Path>, settings: &AppSettings) -> Result<(), CliError> {
    match file {
        Some(path) => io::save_settings_to_path(path, settings)?,
        None => io::save_settings_to_file(settings)?,
    }
    Ok(())
}

/// Runs a prefs action and returns the resulting settings as JSON.
pub fn run(file: Option<&Path>, action: PrefsCommands) -> Result<String, CliError> {
    let settings = match action {
        PrefsCommands::Show => load(file)?,
        PrefsCommands::Reset => {
            let settings = AppSettings::default();
            save(file, &settings)?;
            settings
        }
        PrefsCommands::SetTheme { theme } => {
            let mut settings = load(file)?;
            settings.theme = theme.into();
            save(file, &settings)?;
            settings
        }
        PrefsCommands::SetFontScale { percent } => {
            let mut settings = load(file)?;
            settings.set_font_scale(percent);
            save(file, &settings)?;
            settings
        }
        PrefsCommands::SetScript { script } => {
            let script: NumeralScript = script.parse()?;
            let mut settings = load(file)?;
            settings.numeral_script = script;
            save(file, &settings)?;
            settings
        }
        PrefsCommands::SetUrduFont { path } => {
            let mut settings = load(file)?;
            settings.urdu_font_path = path;
            save(file, &settings)?;
            settings
        }
    };
    Ok(serde_json::to_string_pretty(&settings)?)
}
