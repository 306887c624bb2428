//! JSON file snapshot store.

use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::storage::traits::SnapshotStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the address book as pretty-printed JSON at a fixed path.
///
/// Saving writes a temporary sibling file and renames it over the target,
/// so an interrupted save never leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "No snapshot at {}, starting with an empty book",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(err.into()),
        };
        let book: AddressBook = serde_json::from_str(&contents)?;
        tracing::debug!(
            "Loaded {} record(s) from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            "Saved {} record(s) to {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }
}
