//! Text recognition through the `tesseract` command-line tool.
//!
//! The image is piped to `tesseract stdin stdout tsv` as PNG. The TSV output
//! has one row per layout element; word rows carry the recognized text and a
//! per-word confidence. The recognized text is the concatenation of the
//! non-empty words and the confidence is the median of the confidences that
//! parse.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use image::{ImageFormat, RgbaImage};

use super::{ReadingError, RecognizedText, TextRecognizer};

/// Default recognizer binary, resolved through `PATH`.
pub const DEFAULT_TESSERACT_BINARY: &str = "tesseract";

/// Index of the `conf` column in tesseract TSV output.
const TSV_CONF_COLUMN: usize = 10;

/// Index of the `text` column in tesseract TSV output.
const TSV_TEXT_COLUMN: usize = 11;

/// One word row from tesseract TSV output.
#[derive(Debug, Clone, PartialEq)]
pub struct TsvToken {
    pub text: String,
    /// `None` when the conf column does not parse.
    pub confidence: Option<f32>,
}

/// Parse tesseract TSV output into its non-empty word tokens.
///
/// The header row, structural rows (empty text) and rows too short to have
/// a text column are skipped. A word whose confidence does not parse keeps
/// its text.
pub fn parse_tsv(output: &str) -> Vec<TsvToken> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let columns: Vec<&str> = line.split('\t').collect();
            let text = columns.get(TSV_TEXT_COLUMN)?.trim();
            if text.is_empty() {
                return None;
            }
            let confidence = columns
                .get(TSV_CONF_COLUMN)
                .and_then(|conf| conf.trim().parse::<f32>().ok());
            Some(TsvToken {
                text: text.to_string(),
                confidence,
            })
        })
        .collect()
}

/// Median of the token confidences, truncated to an integer in 0-100.
///
/// For an even number of tokens the upper of the two middle values is
/// used. Tokens without a confidence are left out; none left means zero
/// confidence.
pub fn median_confidence(tokens: &[TsvToken]) -> u8 {
    let mut confidences: Vec<i32> = tokens
        .iter()
        .filter_map(|t| t.confidence)
        .map(|c| c as i32)
        .collect();
    if confidences.is_empty() {
        return 0;
    }
    confidences.sort_unstable();
    confidences[confidences.len() / 2].clamp(0, 100) as u8
}

/// Recognizer backed by the tesseract CLI.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    binary: PathBuf,
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_TESSERACT_BINARY)
    }
}

impl TesseractRecognizer {
    /// Create a recognizer that runs the given binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Path of the tesseract binary.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn run(&self, png: &[u8]) -> Result<String, ReadingError> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "tsv"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ReadingError::RecognizerSpawn {
                binary: self.binary.clone(),
                source,
            })?;

        // Dropping stdin closes the pipe so tesseract sees end of input. A
        // failed write is reported after the exit status, which carries the
        // child's stderr when it quit early.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(png),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(ReadingError::RecognizerFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&mut self, image: &RgbaImage) -> Result<RecognizedText, ReadingError> {
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        let tsv = self.run(&png)?;
        let tokens = parse_tsv(&tsv);
        let text: String = tokens.iter().map(|t| t.text.as_str()).collect();
        let confidence = median_confidence(&tokens);

        tracing::trace!(text = %text, confidence, tokens = tokens.len(), "Recognized region");
        Ok(RecognizedText::new(text, confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    fn tsv(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn test_parse_tsv_keeps_word_rows() {
        let output = tsv(&[
            "1\t1\t0\t0\t0\t0\t0\t0\t85\t30\t-1\t",
            "4\t1\t1\t1\t1\t0\t2\t3\t80\t25\t-1\t",
            "5\t1\t1\t1\t1\t1\t2\t3\t40\t25\t91.512\tKills:",
            "5\t1\t1\t1\t1\t2\t50\t3\t20\t25\t96.000\t12",
        ]);

        let tokens = parse_tsv(&output);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Kills:");
        assert_eq!(tokens[1].text, "12");
        assert!((tokens[0].confidence.unwrap() - 91.512).abs() < 1e-3);
    }

    #[test]
    fn test_parse_tsv_skips_short_rows() {
        assert!(parse_tsv(&tsv(&["garbage"])).is_empty());
    }

    #[test]
    fn test_unparsable_confidence_keeps_text() {
        let output = tsv(&[
            "5\t1\t1\t1\t1\t1\t2\t3\t40\t25\t92\tKills:",
            "5\t1\t1\t1\t1\t2\t50\t3\t20\t25\tNaNish\t7",
        ]);

        let tokens = parse_tsv(&output);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "7");
        assert_eq!(tokens[1].confidence, None);
        assert_eq!(median_confidence(&tokens), 92);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_tsv("").is_empty());
        assert!(parse_tsv(HEADER).is_empty());
    }

    fn token(confidence: f32) -> TsvToken {
        TsvToken {
            text: "x".to_string(),
            confidence: Some(confidence),
        }
    }

    #[test]
    fn test_median_of_no_tokens_is_zero() {
        assert_eq!(median_confidence(&[]), 0);
    }

    #[test]
    fn test_median_odd_count() {
        let tokens = [token(95.0), token(40.0), token(90.0)];
        assert_eq!(median_confidence(&tokens), 90);
    }

    #[test]
    fn test_median_even_count_takes_upper_middle() {
        let tokens = [token(10.0), token(95.9), token(80.0), token(20.0)];
        assert_eq!(median_confidence(&tokens), 80);
    }

    #[test]
    fn test_median_truncates_fraction() {
        assert_eq!(median_confidence(&[token(88.99)]), 88);
    }

    #[test]
    fn test_median_clamps_negative() {
        assert_eq!(median_confidence(&[token(-1.0)]), 0);
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let mut recognizer = TesseractRecognizer::new("/nonexistent/killtrak-tesseract");
        let image = RgbaImage::new(4, 4);

        let err = recognizer.recognize(&image).unwrap_err();
        assert!(matches!(err, ReadingError::RecognizerSpawn { .. }));
    }

    /// Noise PNGs do not compress, so the encoded image outgrows the pipe
    /// buffer and the write fails once the child has exited.
    fn noisy_image(side: u32) -> RgbaImage {
        let mut state: u32 = 0x2545_f491;
        RgbaImage::from_fn(side, side, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            image::Rgba(state.to_le_bytes())
        })
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_reports_exit_status() {
        let mut recognizer = TesseractRecognizer::new("false");

        let err = recognizer.recognize(&noisy_image(512)).unwrap_err();

        assert!(matches!(err, ReadingError::RecognizerFailed { .. }), "{err}");
    }
}
