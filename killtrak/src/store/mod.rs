//! Persistent stats storage.
//!
//! Only the running totals and the chosen resolution survive a restart.
//! They are kept as one flat JSON record that is read once at startup and
//! overwritten wholesale whenever a tick produces an event:
//!
//! ```json
//! {"kills": 42, "vehicle_kills": 3, "resolution": [1920, 1080]}
//! ```

mod json;
mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolution::{Resolution, ResolutionError};
use crate::tracker::Totals;

pub use json::JsonStatsStore;
pub use memory::MemoryStatsStore;

/// Errors raised by a stats store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the stats file failed.
    #[error("Stats file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stats file is not valid JSON for a stats record.
    #[error("Malformed stats file: {0}")]
    Json(#[from] serde_json::Error),
}

/// The persisted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    pub kills: u64,
    pub vehicle_kills: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<(u32, u32)>,
}

impl StatsRecord {
    /// Build a record from totals and the active resolution.
    pub fn new(totals: Totals, resolution: Option<Resolution>) -> Self {
        Self {
            kills: totals.kills,
            vehicle_kills: totals.vehicle_kills,
            resolution: resolution.map(|r| r.dimensions()),
        }
    }

    /// Totals held in the record.
    pub fn totals(&self) -> Totals {
        Totals::new(self.kills, self.vehicle_kills)
    }

    /// Saved resolution, validated against the supported set.
    ///
    /// `Ok(None)` when no resolution has been chosen yet.
    pub fn resolution(&self) -> Result<Option<Resolution>, ResolutionError> {
        self.resolution
            .map(|(width, height)| Resolution::from_dimensions(width, height))
            .transpose()
    }
}

/// Loads and saves the stats record.
pub trait StatsStore {
    /// Load the record, creating an empty one if none exists yet.
    fn load(&mut self) -> Result<StatsRecord, StoreError>;

    /// Replace the stored record.
    fn save(&mut self, record: &StatsRecord) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_resolution_as_pair() {
        let record = StatsRecord::new(Totals::new(42, 3), Some(Resolution::FullHd));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"kills":42,"vehicle_kills":3,"resolution":[1920,1080]}"#);
    }

    #[test]
    fn test_record_omits_missing_resolution() {
        let json = serde_json::to_string(&StatsRecord::default()).unwrap();
        assert_eq!(json, r#"{"kills":0,"vehicle_kills":0}"#);
    }

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: StatsRecord = serde_json::from_str(r#"{"kills": 9}"#).unwrap();
        assert_eq!(record.totals(), Totals::new(9, 0));
        assert_eq!(record.resolution, None);
    }

    #[test]
    fn test_record_resolution_validation() {
        let mut record = StatsRecord::default();
        assert_eq!(record.resolution(), Ok(None));

        record.resolution = Some((1728, 1080));
        assert_eq!(record.resolution(), Ok(Some(Resolution::Wide1728)));

        record.resolution = Some((800, 600));
        assert!(matches!(
            record.resolution(),
            Err(ResolutionError::Unsupported { width: 800, height: 600 })
        ));
    }
}
