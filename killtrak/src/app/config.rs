//! Runtime settings for the tracker loop.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::ConfigFile;
use crate::reading::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_TESSERACT_BINARY};
use crate::tracker::{ResetPolicy, StreakConfig};

/// Default pause between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Settings the loop and its collaborators are built from.
///
/// Usually derived from the config file, with CLI flags applied on top via
/// the `with_*` methods.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerSettings {
    /// Pause between ticks.
    pub interval: Duration,

    /// Minimum OCR confidence (0-100) for a reading to be used.
    pub confidence_threshold: u8,

    /// Streak window.
    pub streak: StreakConfig,

    /// Reset handling for the kills counter.
    pub kills_reset_policy: ResetPolicy,

    /// Reset handling for the vehicle-kills counter.
    pub vehicle_reset_policy: ResetPolicy,

    /// Show the vehicle-kill notice under the streak message.
    pub vehicle_kill_notice: bool,

    /// Save every capture as a PNG.
    pub debug_captures: bool,

    /// Directory for debug captures.
    pub debug_dir: PathBuf,

    /// Tesseract binary.
    pub tesseract_path: PathBuf,

    /// Stats file.
    pub data_file: PathBuf,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self::from_config_file(&ConfigFile::default())
    }
}

impl TrackerSettings {
    /// Build settings from a loaded config file.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        Self {
            interval: Duration::from_millis(config.tracker.interval_ms),
            confidence_threshold: config.tracker.confidence_threshold,
            streak: StreakConfig::new(Duration::from_secs(config.tracker.streak_window_secs)),
            kills_reset_policy: config.tracker.kills_reset_policy,
            vehicle_reset_policy: config.tracker.vehicle_reset_policy,
            vehicle_kill_notice: config.tracker.vehicle_kill_notice,
            debug_captures: config.ocr.debug_captures,
            debug_dir: config.ocr.debug_dir.clone(),
            tesseract_path: config.ocr.tesseract_path.clone(),
            data_file: config.storage.data_file.clone(),
        }
    }

    /// Override the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override the confidence threshold. Values above 100 are clamped.
    pub fn with_confidence_threshold(mut self, threshold: u8) -> Self {
        self.confidence_threshold = threshold.min(100);
        self
    }

    /// Override the streak window.
    pub fn with_streak_window(mut self, window: Duration) -> Self {
        self.streak = StreakConfig::new(window);
        self
    }

    /// Enable or disable the vehicle-kill notice.
    pub fn with_vehicle_kill_notice(mut self, enabled: bool) -> Self {
        self.vehicle_kill_notice = enabled;
        self
    }

    /// Enable or disable debug captures.
    pub fn with_debug_captures(mut self, enabled: bool) -> Self {
        self.debug_captures = enabled;
        self
    }

    /// Override the stats file.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Debug capture directory when captures are enabled.
    pub fn debug_capture_dir(&self) -> Option<&PathBuf> {
        self.debug_captures.then_some(&self.debug_dir)
    }
}
