//! Stat extraction from recognized text.
//!
//! OCR output for a counter region is rarely just the number: the label
//! next to it, stray punctuation and misread glyphs all end up in the text.
//! The extractor keeps the first run of digits and ignores everything else.

use std::sync::OnceLock;

use regex::Regex;

static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();

fn digit_run() -> &'static Regex {
    DIGIT_RUN.get_or_init(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"))
}

/// Extract the first integer found in a string.
///
/// Returns the value of the first maximal run of ASCII decimal digits, or
/// `None` when the text contains no digits. A run too long to fit in a `u32`
/// is treated as garbled OCR output and also yields `None`.
///
/// # Example
///
/// ```
/// use killtrak::extract::extract_stat;
///
/// assert_eq!(extract_stat("Kills: 12"), Some(12));
/// assert_eq!(extract_stat("--"), None);
/// ```
pub fn extract_stat(text: &str) -> Option<u32> {
    digit_run()
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}
