//! Configuration file loading and saving.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::{config_file_path, data_dir, ConfigKey};
use crate::reading::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_TESSERACT_BINARY};
use crate::tracker::ResetPolicy;

/// Errors that can occur while reading or writing the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be parsed as INI.
    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// Reading or writing the file failed.
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value is not valid for its key.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// The key does not exist.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),
}

/// `[tracker]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSection {
    /// Pause between ticks, in milliseconds.
    pub interval_ms: u64,
    /// Minimum OCR confidence (0-100) for a reading to be used.
    pub confidence_threshold: u8,
    /// Inactivity after which a streak ends, in seconds.
    pub streak_window_secs: u64,
    /// How a drop in the kills counter is accounted.
    pub kills_reset_policy: ResetPolicy,
    /// How a drop in the vehicle-kills counter is accounted.
    pub vehicle_reset_policy: ResetPolicy,
    /// Add a notice under the streak message when a vehicle kill lands.
    pub vehicle_kill_notice: bool,
}

impl Default for TrackerSection {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            streak_window_secs: 30,
            kills_reset_policy: ResetPolicy::CarryIntoTotal,
            vehicle_reset_policy: ResetPolicy::SessionBoundary,
            vehicle_kill_notice: true,
        }
    }
}

/// `[ocr]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrSection {
    /// Tesseract binary, absolute or resolved through `PATH`.
    pub tesseract_path: PathBuf,
    /// Save each tick's captures as PNG files.
    pub debug_captures: bool,
    /// Where debug captures are written.
    pub debug_dir: PathBuf,
}

impl Default for OcrSection {
    fn default() -> Self {
        Self {
            tesseract_path: PathBuf::from(DEFAULT_TESSERACT_BINARY),
            debug_captures: false,
            debug_dir: data_dir().join("debug"),
        }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageSection {
    /// JSON stats file.
    pub data_file: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_file: data_dir().join("data.json"),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSection {
    /// Directory for rolling log files.
    pub directory: PathBuf,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            directory: data_dir().join("logs"),
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub tracker: TrackerSection,
    pub ocr: OcrSection,
    pub storage: StorageSection,
    pub logging: LoggingSection,
}

impl ConfigFile {
    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from a specific path. A missing file yields defaults.
    ///
    /// Keys that are not recognized are ignored; recognized keys with
    /// invalid values are an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if !path.exists() {
            return Ok(config);
        }

        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(io) => ConfigError::Io(io),
            ini::Error::Parse(parse) => ConfigError::Parse {
                path: path.to_path_buf(),
                reason: parse.to_string(),
            },
        })?;

        for key in ConfigKey::all() {
            if let Some(value) = ini.get_from(Some(key.section()), key.key_name()) {
                key.set(&mut config, value)?;
            }
        }

        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to a specific path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        ini.write_to_file(path)?;
        Ok(())
    }
}
