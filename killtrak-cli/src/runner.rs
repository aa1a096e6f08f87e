//! Shared command setup: configuration and logging.

use killtrak::config::ConfigFile;
use killtrak::logging::{init_logging, WorkerGuard};
use tracing::info;

use crate::error::CliError;

/// Loaded configuration plus the log writer guard.
///
/// Commands that run the tracker or touch the screen create one of these
/// first. Dropping it flushes the log file.
pub struct CliRunner {
    config: ConfigFile,
    _log_guard: WorkerGuard,
}

impl CliRunner {
    /// Load `config.ini` and start file logging.
    pub fn new() -> Result<Self, CliError> {
        let config = ConfigFile::load()?;
        let guard = init_logging(&config.logging.directory).map_err(CliError::Logging)?;
        Ok(Self {
            config,
            _log_guard: guard,
        })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Record which command started and where its files live.
    pub fn log_startup(&self, command: &str) {
        info!(
            version = killtrak::VERSION,
            command,
            data_file = %self.config.storage.data_file.display(),
            logs = %self.config.logging.directory.display(),
            "KillTrak starting"
        );
    }
}
