//! CLI error type.

use std::io;

use killtrak::app::AppError;
use killtrak::config::ConfigError;
use killtrak::reading::ReadingError;
use killtrak::resolution::ResolutionError;
use killtrak::store::StoreError;
use thiserror::Error;

/// Errors reported by CLI commands. All of them end the process with
/// status 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid or unusable configuration, with a user-facing explanation.
    #[error("{0}")]
    Config(String),

    /// Loading or saving `config.ini` failed.
    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    /// The tracker stopped with an error.
    #[error(transparent)]
    App(#[from] AppError),

    /// Reading or writing the stats file failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A one-shot capture failed.
    #[error(transparent)]
    Reading(#[from] ReadingError),

    /// The saved resolution is not supported.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The log directory could not be set up.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_map_to_config_file() {
        let err: CliError = ConfigError::UnknownKey("tracker.speed".to_string()).into();

        assert!(matches!(err, CliError::ConfigFile(_)));
        assert!(err.to_string().contains("tracker.speed"));
    }
}
