//! JSON file stats store.

use std::fs;
use std::path::{Path, PathBuf};

use super::{StatsRecord, StatsStore, StoreError};

/// Stats store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonStatsStore {
    path: PathBuf,
}

impl JsonStatsStore {
    /// Create a store for the given file. Nothing is touched until the first
    /// load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the stats file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, record: &StatsRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl StatsStore for JsonStatsStore {
    fn load(&mut self) -> Result<StatsRecord, StoreError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "Creating stats file");
            let record = StatsRecord::default();
            self.write(&record)?;
            return Ok(record);
        }

        let content = fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    fn save(&mut self, record: &StatsRecord) -> Result<(), StoreError> {
        self.write(record)?;
        tracing::debug!(
            kills = record.kills,
            vehicle_kills = record.vehicle_kills,
            "Saved stats"
        );
        Ok(())
    }
}
