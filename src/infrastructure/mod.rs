//! Snapshot backends implementing the `SnapshotStore` port.

pub mod in_memory;
pub mod json_file;
