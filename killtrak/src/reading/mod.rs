//! Reading source: screen capture plus OCR.
//!
//! A reading is produced in two steps, each behind its own trait so either
//! can be swapped out:
//!
//! ```text
//! ScreenRegion ──► RegionCapture ──► RgbaImage ──► TextRecognizer ──► RecognizedText
//!                  (xcap)                          (tesseract CLI)     { text, confidence }
//! ```
//!
//! [`OcrReadingSource`] composes the two and optionally writes each capture
//! to disk for debugging. The tracker loop only sees the [`ReadingSource`]
//! trait, which tests implement directly with scripted results.

mod capture;
mod error;
mod tesseract;

use std::path::PathBuf;

use image::RgbaImage;

use crate::extract::extract_stat;
use crate::resolution::ScreenRegion;
use crate::tracker::CounterKind;

pub use capture::ScreenCapture;
pub use error::ReadingError;
pub use tesseract::{
    median_confidence, parse_tsv, TesseractRecognizer, TsvToken, DEFAULT_TESSERACT_BINARY,
};

/// Default minimum OCR confidence for a reading to be trusted.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u8 = 88;

/// Text recognized in one region with the recognizer's confidence (0-100).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizedText {
    pub text: String,
    pub confidence: u8,
}

impl RecognizedText {
    /// Create a recognition result. Confidence is clamped to 100.
    pub fn new(text: impl Into<String>, confidence: u8) -> Self {
        Self {
            text: text.into(),
            confidence: confidence.min(100),
        }
    }
}

/// A counter reading, absent when the OCR result was not trustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReading {
    pub value: Option<u32>,
    pub confidence: u8,
}

impl CounterReading {
    /// Build a reading from recognized text.
    ///
    /// The value is absent when confidence is below `threshold` or the text
    /// contains no digits.
    pub fn from_recognized(recognized: &RecognizedText, threshold: u8) -> Self {
        let value = if recognized.confidence >= threshold {
            extract_stat(&recognized.text)
        } else {
            None
        };
        Self {
            value,
            confidence: recognized.confidence,
        }
    }

    /// Whether the reading carries a value.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// Grabs a region of the screen.
pub trait RegionCapture {
    fn capture(&mut self, region: &ScreenRegion) -> Result<RgbaImage, ReadingError>;
}

/// Recognizes text in an image.
pub trait TextRecognizer {
    fn recognize(&mut self, image: &RgbaImage) -> Result<RecognizedText, ReadingError>;
}

/// Produces recognized text for a counter region.
pub trait ReadingSource {
    fn read(
        &mut self,
        counter: CounterKind,
        region: &ScreenRegion,
    ) -> Result<RecognizedText, ReadingError>;
}

/// Capture + OCR reading source.
pub struct OcrReadingSource<C, R> {
    capture: C,
    recognizer: R,
    /// Directory for debug captures; `None` disables them.
    debug_dir: Option<PathBuf>,
}

impl<C: RegionCapture, R: TextRecognizer> OcrReadingSource<C, R> {
    /// Create a reading source.
    pub fn new(capture: C, recognizer: R) -> Self {
        Self {
            capture,
            recognizer,
            debug_dir: None,
        }
    }

    /// Save every capture as `<counter>.png` in `dir`, overwriting the
    /// previous tick's image.
    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    /// Debug capture directory, if enabled.
    pub fn debug_dir(&self) -> Option<&PathBuf> {
        self.debug_dir.as_ref()
    }

    fn save_debug_capture(&self, counter: CounterKind, image: &RgbaImage) -> Result<(), ReadingError> {
        let Some(dir) = &self.debug_dir else {
            return Ok(());
        };
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.png", counter.label()));
        image.save(&path)?;
        tracing::trace!(path = %path.display(), "Saved debug capture");
        Ok(())
    }
}

impl<C: RegionCapture, R: TextRecognizer> ReadingSource for OcrReadingSource<C, R> {
    fn read(
        &mut self,
        counter: CounterKind,
        region: &ScreenRegion,
    ) -> Result<RecognizedText, ReadingError> {
        let image = self.capture.capture(region)?;
        self.save_debug_capture(counter, &image)?;
        self.recognizer.recognize(&image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BlankCapture {
        captured: Vec<ScreenRegion>,
    }

    impl RegionCapture for BlankCapture {
        fn capture(&mut self, region: &ScreenRegion) -> Result<RgbaImage, ReadingError> {
            self.captured.push(*region);
            Ok(RgbaImage::new(region.width(), region.height()))
        }
    }

    struct FixedRecognizer(RecognizedText);

    impl TextRecognizer for FixedRecognizer {
        fn recognize(&mut self, _image: &RgbaImage) -> Result<RecognizedText, ReadingError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_reading_requires_confidence() {
        let confident = RecognizedText::new("Kills 12", 90);
        let shaky = RecognizedText::new("Kills 12", 87);

        assert_eq!(CounterReading::from_recognized(&confident, 88).value, Some(12));
        assert_eq!(CounterReading::from_recognized(&shaky, 88).value, None);
        assert_eq!(CounterReading::from_recognized(&shaky, 88).confidence, 87);
    }

    #[test]
    fn test_reading_at_threshold_is_accepted() {
        let text = RecognizedText::new("4", 88);
        assert!(CounterReading::from_recognized(&text, 88).is_present());
    }

    #[test]
    fn test_reading_without_digits_is_absent() {
        let text = RecognizedText::new("Kills", 99);
        assert!(!CounterReading::from_recognized(&text, 88).is_present());
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(RecognizedText::new("1", 250).confidence, 100);
    }

    #[test]
    fn test_ocr_source_captures_region_and_recognizes() {
        let capture = BlankCapture { captured: vec![] };
        let recognizer = FixedRecognizer(RecognizedText::new("3", 95));
        let mut source = OcrReadingSource::new(capture, recognizer);
        let region = ScreenRegion::new(10, 10, 40, 20);

        let result = source.read(CounterKind::Kills, &region).unwrap();

        assert_eq!(result, RecognizedText::new("3", 95));
        assert_eq!(source.capture.captured, vec![region]);
    }

    #[test]
    fn test_ocr_source_writes_debug_captures() {
        let dir = tempfile::tempdir().unwrap();
        let debug_dir = dir.path().join("debug");
        let mut source = OcrReadingSource::new(
            BlankCapture { captured: vec![] },
            FixedRecognizer(RecognizedText::new("1", 95)),
        )
        .with_debug_dir(&debug_dir);

        let region = ScreenRegion::new(0, 0, 8, 4);
        source.read(CounterKind::Kills, &region).unwrap();
        source.read(CounterKind::VehicleKills, &region).unwrap();

        assert!(debug_dir.join("kills.png").exists());
        assert!(debug_dir.join("vehicle_kills.png").exists());
    }
}
