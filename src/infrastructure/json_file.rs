use crate::domain::ports::SnapshotStore;
use crate::domain::snapshot::SnapshotRecord;
use crate::error::{LedgerError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "accounts.json";

/// Persists the account snapshot as a pretty-printed JSON array.
///
/// Saves go through a temporary file in the destination directory which then
/// replaces the destination, so an interrupted save never leaves a truncated
/// snapshot behind.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn write_atomically(&self, records: &[SnapshotRecord]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            let mut serializer =
                serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
            records.serialize(&mut serializer)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileSnapshot {
    fn load(&self) -> Result<Vec<SnapshotRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no snapshot found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(LedgerError::SnapshotLoad(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            LedgerError::SnapshotLoad(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, records: &[SnapshotRecord]) -> Result<()> {
        self.write_atomically(records)
            .map_err(|source| LedgerError::SnapshotSave {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), records = records.len(), "snapshot written");
        Ok(())
    }
}
