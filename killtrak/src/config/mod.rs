//! User configuration.
//!
//! Settings live in an INI file under the platform config directory
//! (`~/.config/killtrak/config.ini` on Linux). A missing file means all
//! defaults. Every setting is addressed by a [`ConfigKey`] of the form
//! `section.key`, which the CLI `config` command uses to get and set values.
//!
//! ```ini
//! [tracker]
//! interval_ms = 1000
//! confidence_threshold = 88
//! streak_window_secs = 30
//! kills_reset_policy = carry
//! vehicle_reset_policy = boundary
//!
//! [ocr]
//! tesseract_path = tesseract
//! debug_captures = false
//! debug_dir = /home/user/.local/share/killtrak/debug
//!
//! [storage]
//! data_file = /home/user/.local/share/killtrak/data.json
//!
//! [logging]
//! directory = /home/user/.local/share/killtrak/logs
//! ```

mod file;
mod keys;

use std::path::PathBuf;

pub use file::{
    ConfigError, ConfigFile, LoggingSection, OcrSection, StorageSection, TrackerSection,
};
pub use keys::ConfigKey;

/// Application directory name under the platform config/data directories.
const APP_DIR: &str = "killtrak";

/// Path of the configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.ini")
}

/// Directory holding the stats file, logs and debug captures by default.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
