// src/settings/io.rs
use bevy::log::{debug, error, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "CrossCalculator";
const APPLICATION: &str = "CrossCalculatorApp";
const CONFIG_FILE: &str = "app_settings.json";

pub fn get_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(
            ErrorKind::NotFound,
            "Could not determine project directories for app settings.",
        ))
    }
}

pub fn load_settings_from_file<T: for<'de> serde::de::Deserialize<'de> + Default>() -> io::Result<T> {
    load_settings_from_path(&get_config_path()?)
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> io::Result<()> {
    save_settings_to_path(&get_config_path()?, settings)
}

pub fn load_settings_from_path<T: for<'de> serde::de::Deserialize<'de> + Default>(
    config_file: &Path,
) -> io::Result<T> {
    info!("AppSettings: Attempting to load settings from {:?}", config_file);
    match fs::File::open(config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(settings) => {
                    info!("AppSettings: Successfully deserialized settings.");
                    Ok(settings)
                }
                Err(e) => {
                    error!("AppSettings: Failed to parse settings file {:?}: {}", config_file, e);
                    Err(io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Failed to parse settings file: {}", e),
                    ))
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: Settings file not found at {:?}. Returning default.", config_file);
            Ok(Default::default())
        }
        Err(e) => {
            error!("AppSettings: Failed to open settings file {:?}: {}", config_file, e);
            Err(e)
        }
    }
}

pub fn save_settings_to_path<T: serde::Serialize>(config_file: &Path, settings: &T) -> io::Result<()> {
    info!("AppSettings: Saving settings to {:?}", config_file);
    let file = fs::File::create(config_file)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings).map_err(|e| {
        error!("AppSettings: Failed to serialize settings to {:?}: {}", config_file, e);
        io::Error::new(ErrorKind::Other, e)
    })?;
    debug!("AppSettings: write to {:?} complete", config_file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross::NumeralScript;
    use crate::settings::{AppSettings, ThemePreference};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: AppSettings = load_settings_from_path(&dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut settings = AppSettings {
            theme: ThemePreference::Dark,
            numeral_script: NumeralScript::Western,
            ..Default::default()
        };
        settings.set_font_scale(130);

        save_settings_to_path(&path, &settings).unwrap();
        let loaded: AppSettings = load_settings_from_path(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn corrupt_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        let err = load_settings_from_path::<AppSettings>(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
