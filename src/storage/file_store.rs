//! File-backed snapshot store.

use crate::book::AddressBook;
use crate::error::SnapshotResult;
use crate::storage::SnapshotStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Snapshot store that keeps the address book as a JSON file on disk.
///
/// The whole book is written in one shot on `save` and read back on `load`;
/// there is no incremental durability. A missing file loads as an empty book.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> SnapshotResult<AddressBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_str(&raw)?;
        info!(
            path = %self.path.display(),
            records = book.len(),
            "Loaded address book snapshot"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> SnapshotResult<()> {
        let raw = serde_json::to_string(book)?;
        fs::write(&self.path, raw)?;
        info!(
            path = %self.path.display(),
            records = book.len(),
            "Saved address book snapshot"
        );
        Ok(())
    }
}
