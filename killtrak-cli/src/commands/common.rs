//! Common helpers shared across CLI commands.

use std::path::PathBuf;

use killtrak::app::TrackerSettings;
use killtrak::reading::{OcrReadingSource, ScreenCapture, TesseractRecognizer};

/// The production reading source: xcap screen capture plus tesseract.
pub type ScreenReader = OcrReadingSource<ScreenCapture, TesseractRecognizer>;

/// Build the screen reader from settings, with debug captures when enabled.
pub fn screen_reader(settings: &TrackerSettings) -> ScreenReader {
    let source = OcrReadingSource::new(
        ScreenCapture::new(),
        TesseractRecognizer::new(&settings.tesseract_path),
    );
    match settings.debug_capture_dir() {
        Some(dir) => source.with_debug_dir(dir),
        None => source,
    }
}

/// Apply a `--data` override on top of the configured stats file.
pub fn apply_data_override(settings: TrackerSettings, data: Option<PathBuf>) -> TrackerSettings {
    match data {
        Some(path) => settings.with_data_file(path),
        None => settings,
    }
}
