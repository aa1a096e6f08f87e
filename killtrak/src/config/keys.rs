//! Addressable configuration keys.

use std::path::PathBuf;
use std::str::FromStr;

use super::{ConfigError, ConfigFile};
use crate::tracker::ResetPolicy;

/// Smallest accepted tick interval. Faster polling only burns OCR time.
const MIN_INTERVAL_MS: u64 = 100;

/// A configuration setting, addressed as `section.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    TrackerIntervalMs,
    TrackerConfidenceThreshold,
    TrackerStreakWindowSecs,
    TrackerKillsResetPolicy,
    TrackerVehicleResetPolicy,
    TrackerVehicleKillNotice,
    OcrTesseractPath,
    OcrDebugCaptures,
    OcrDebugDir,
    StorageDataFile,
    LoggingDirectory,
}

impl ConfigKey {
    /// All keys, grouped by section in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::TrackerIntervalMs,
            ConfigKey::TrackerConfidenceThreshold,
            ConfigKey::TrackerStreakWindowSecs,
            ConfigKey::TrackerKillsResetPolicy,
            ConfigKey::TrackerVehicleResetPolicy,
            ConfigKey::TrackerVehicleKillNotice,
            ConfigKey::OcrTesseractPath,
            ConfigKey::OcrDebugCaptures,
            ConfigKey::OcrDebugDir,
            ConfigKey::StorageDataFile,
            ConfigKey::LoggingDirectory,
        ]
    }

    /// INI section name.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::TrackerIntervalMs
            | ConfigKey::TrackerConfidenceThreshold
            | ConfigKey::TrackerStreakWindowSecs
            | ConfigKey::TrackerKillsResetPolicy
            | ConfigKey::TrackerVehicleResetPolicy
            | ConfigKey::TrackerVehicleKillNotice => "tracker",
            ConfigKey::OcrTesseractPath | ConfigKey::OcrDebugCaptures | ConfigKey::OcrDebugDir => {
                "ocr"
            }
            ConfigKey::StorageDataFile => "storage",
            ConfigKey::LoggingDirectory => "logging",
        }
    }

    /// Key name within its section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::TrackerIntervalMs => "interval_ms",
            ConfigKey::TrackerConfidenceThreshold => "confidence_threshold",
            ConfigKey::TrackerStreakWindowSecs => "streak_window_secs",
            ConfigKey::TrackerKillsResetPolicy => "kills_reset_policy",
            ConfigKey::TrackerVehicleResetPolicy => "vehicle_reset_policy",
            ConfigKey::TrackerVehicleKillNotice => "vehicle_kill_notice",
            ConfigKey::OcrTesseractPath => "tesseract_path",
            ConfigKey::OcrDebugCaptures => "debug_captures",
            ConfigKey::OcrDebugDir => "debug_dir",
            ConfigKey::StorageDataFile => "data_file",
            ConfigKey::LoggingDirectory => "directory",
        }
    }

    /// Full name, `section.key`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Current value as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::TrackerIntervalMs => config.tracker.interval_ms.to_string(),
            ConfigKey::TrackerConfidenceThreshold => {
                config.tracker.confidence_threshold.to_string()
            }
            ConfigKey::TrackerStreakWindowSecs => config.tracker.streak_window_secs.to_string(),
            ConfigKey::TrackerKillsResetPolicy => config.tracker.kills_reset_policy.to_string(),
            ConfigKey::TrackerVehicleResetPolicy => config.tracker.vehicle_reset_policy.to_string(),
            ConfigKey::TrackerVehicleKillNotice => config.tracker.vehicle_kill_notice.to_string(),
            ConfigKey::OcrTesseractPath => config.ocr.tesseract_path.display().to_string(),
            ConfigKey::OcrDebugCaptures => config.ocr.debug_captures.to_string(),
            ConfigKey::OcrDebugDir => config.ocr.debug_dir.display().to_string(),
            ConfigKey::StorageDataFile => config.storage.data_file.display().to_string(),
            ConfigKey::LoggingDirectory => config.logging.directory.display().to_string(),
        }
    }

    /// Validate and store a value.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason,
        };

        match self {
            ConfigKey::TrackerIntervalMs => {
                let ms: u64 = value.parse().map_err(|_| invalid("expected milliseconds".into()))?;
                if ms < MIN_INTERVAL_MS {
                    return Err(invalid(format!("must be at least {} ms", MIN_INTERVAL_MS)));
                }
                config.tracker.interval_ms = ms;
            }
            ConfigKey::TrackerConfidenceThreshold => {
                let threshold: u8 = value
                    .parse()
                    .ok()
                    .filter(|t| *t <= 100)
                    .ok_or_else(|| invalid("expected a number from 0 to 100".into()))?;
                config.tracker.confidence_threshold = threshold;
            }
            ConfigKey::TrackerStreakWindowSecs => {
                let secs: u64 = value
                    .parse()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| invalid("expected a positive number of seconds".into()))?;
                config.tracker.streak_window_secs = secs;
            }
            ConfigKey::TrackerKillsResetPolicy => {
                config.tracker.kills_reset_policy = ResetPolicy::from_str(value).map_err(invalid)?;
            }
            ConfigKey::TrackerVehicleResetPolicy => {
                config.tracker.vehicle_reset_policy =
                    ResetPolicy::from_str(value).map_err(invalid)?;
            }
            ConfigKey::TrackerVehicleKillNotice => {
                config.tracker.vehicle_kill_notice = parse_bool(value)
                    .ok_or_else(|| invalid("expected true or false".into()))?;
            }
            ConfigKey::OcrTesseractPath => {
                config.ocr.tesseract_path = non_empty_path(value).ok_or_else(|| invalid("path is empty".into()))?;
            }
            ConfigKey::OcrDebugCaptures => {
                config.ocr.debug_captures = parse_bool(value)
                    .ok_or_else(|| invalid("expected true or false".into()))?;
            }
            ConfigKey::OcrDebugDir => {
                config.ocr.debug_dir = non_empty_path(value).ok_or_else(|| invalid("path is empty".into()))?;
            }
            ConfigKey::StorageDataFile => {
                config.storage.data_file = non_empty_path(value).ok_or_else(|| invalid("path is empty".into()))?;
            }
            ConfigKey::LoggingDirectory => {
                config.logging.directory = non_empty_path(value).ok_or_else(|| invalid("path is empty".into()))?;
            }
        }
        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
