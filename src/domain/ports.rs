use super::snapshot::SnapshotRecord;
use crate::error::Result;

/// Durable storage for the account set.
///
/// `load` treats a missing snapshot as empty and reports unreadable content as
/// `LedgerError::SnapshotLoad`. `save` replaces the whole snapshot.
pub trait SnapshotStore {
    fn load(&self) -> Result<Vec<SnapshotRecord>>;
    fn save(&self, records: &[SnapshotRecord]) -> Result<()>;
}
