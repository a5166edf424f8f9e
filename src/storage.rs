use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("settings file I/O failed")]
    Io {
        #[from]
        source: io::Error,
    },
    #[error("settings file is not valid JSON")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language code such as `en` or `de`; `None` follows the system locale.
    pub language: Option<String>,
    pub log_level: String,
    // Window geometry from the last session, absent on first run
    pub window_width: Option<i32>,
    pub window_height: Option<i32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: None,
            log_level: "info".to_string(),
            window_width: None,
            window_height: None,
        }
    }
}

fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("io.github", "dicegame", "DiceRollGame").map(|p| p.config_dir().to_path_buf())
}

/// Location of the settings file in the platform config directory.
pub fn settings_path() -> Result<PathBuf, StorageError> {
    project_config_dir()
        .map(|dir| dir.join(SETTINGS_FILE))
        .ok_or(StorageError::NoConfigDir)
}

/// Load settings, using defaults if the file is missing or unreadable.
/// A fallback is logged immediately.
pub fn load_settings() -> Settings {
    let (settings, problem) = load_settings_checked();
    if let Some(e) = problem {
        report_fallback(&e);
    }
    settings
}

pub fn load_settings_from(path: &Path) -> Settings {
    let (settings, problem) = load_settings_checked_from(path);
    if let Some(e) = problem {
        report_fallback(&e);
    }
    settings
}

/// Load settings without logging, returning the reason defaults were used.
/// Lets the caller report it once a subscriber is installed.
pub fn load_settings_checked() -> (Settings, Option<StorageError>) {
    match settings_path() {
        Ok(path) => load_settings_checked_from(&path),
        Err(e) => (Settings::default(), Some(e)),
    }
}

pub fn load_settings_checked_from(path: &Path) -> (Settings, Option<StorageError>) {
    if !path.is_file() {
        return (Settings::default(), None);
    }
    match read_settings(path) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    }
}

/// Log that `error` forced the default settings.
pub fn report_fallback(error: &StorageError) {
    warn!(error = %error, "ignoring settings file, using defaults");
}

fn read_settings(path: &Path) -> Result<Settings, StorageError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn save_settings(settings: &Settings) -> Result<(), StorageError> {
    save_settings_to(&settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}
