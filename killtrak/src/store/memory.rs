//! In-memory stats store.

use super::{StatsRecord, StatsStore, StoreError};

/// Stats store that keeps the record in memory.
///
/// Test double: nothing touches the disk, and tests can inspect how many
/// times the record was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsStore {
    record: StatsRecord,
    saves: usize,
}

impl MemoryStatsStore {
    /// Create a store holding `record`.
    pub fn new(record: StatsRecord) -> Self {
        Self { record, saves: 0 }
    }

    /// The stored record.
    pub fn record(&self) -> &StatsRecord {
        &self.record
    }

    /// Number of saves since creation.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&mut self) -> Result<StatsRecord, StoreError> {
        Ok(self.record)
    }

    fn save(&mut self, record: &StatsRecord) -> Result<(), StoreError> {
        self.record = *record;
        self.saves += 1;
        Ok(())
    }
}
