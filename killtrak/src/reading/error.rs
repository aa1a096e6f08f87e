//! Reading source errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::resolution::ScreenRegion;

/// Errors that can occur while capturing or recognizing a region.
///
/// Low-confidence or unreadable text is not an error; it comes back as a
/// normal result and is discarded by the caller.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// The screen could not be captured.
    #[error("Screen capture failed: {0}")]
    Capture(String),

    /// The requested region is not inside the captured monitor.
    #[error("Region {region} is outside the {width}x{height} monitor image")]
    RegionOutOfBounds {
        region: ScreenRegion,
        width: u32,
        height: u32,
    },

    /// The recognizer binary could not be started.
    #[error("Failed to run recognizer '{}': {source}", binary.display())]
    RecognizerSpawn {
        binary: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The recognizer ran but reported failure.
    #[error("Recognizer exited with {status}: {stderr}")]
    RecognizerFailed { status: String, stderr: String },

    /// A captured image could not be encoded or saved.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error talking to the recognizer or writing debug captures.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
