use crate::domain::ports::SnapshotStore;
use crate::domain::snapshot::SnapshotRecord;
use crate::error::Result;
use std::cell::RefCell;

/// A snapshot backend that keeps records in memory.
///
/// Starts out "missing" (nothing saved yet) unless seeded with records.
/// Useful for tests and for exercising the store without touching the filesystem.
#[derive(Debug, Default)]
pub struct InMemorySnapshot {
    records: RefCell<Option<Vec<SnapshotRecord>>>,
}

impl InMemorySnapshot {
    /// Creates a backend with no saved snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds `records`.
    pub fn with_records(records: Vec<SnapshotRecord>) -> Self {
        Self {
            records: RefCell::new(Some(records)),
        }
    }

    /// Returns the last saved records, if any.
    pub fn records(&self) -> Option<Vec<SnapshotRecord>> {
        self.records.borrow().clone()
    }
}

impl SnapshotStore for InMemorySnapshot {
    fn load(&self) -> Result<Vec<SnapshotRecord>> {
        Ok(self.records.borrow().clone().unwrap_or_default())
    }

    fn save(&self, records: &[SnapshotRecord]) -> Result<()> {
        *self.records.borrow_mut() = Some(records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_in_memory_snapshot_starts_missing() {
        let snapshot = InMemorySnapshot::new();
        assert!(snapshot.records().is_none());
        assert!(snapshot.load().unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_snapshot_save_overwrites() {
        let snapshot = InMemorySnapshot::new();
        let record = SnapshotRecord {
            name: "Main".to_string(),
            owner: "Bob".to_string(),
            balance: dec!(25),
        };

        snapshot.save(&[record.clone(), record.clone()]).unwrap();
        snapshot.save(&[record.clone()]).unwrap();

        assert_eq!(snapshot.load().unwrap(), vec![record]);
    }
}
