//! Application error types.

use std::io;

use thiserror::Error;

use crate::reading::ReadingError;
use crate::resolution::ResolutionError;
use crate::store::StoreError;

/// Errors that end a tracker run.
///
/// None of these are retried: a failing capture, recognizer or stats file
/// stops the loop and the CLI exits with a diagnostic.
#[derive(Debug, Error)]
pub enum AppError {
    /// Capturing or recognizing a counter failed.
    #[error("Failed to read counter: {0}")]
    Reading(#[from] ReadingError),

    /// Loading or saving the stats record failed.
    #[error("Failed to persist stats: {0}")]
    Store(#[from] StoreError),

    /// The chosen or persisted resolution is not usable.
    #[error("{0}")]
    Resolution(#[from] ResolutionError),

    /// Asking the user for a resolution failed.
    #[error("Failed to read resolution input: {0}")]
    Prompt(#[source] io::Error),

    /// Drawing the dashboard failed.
    #[error("Failed to render status: {0}")]
    Present(#[source] io::Error),
}
