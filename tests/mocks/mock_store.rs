use rolodex::error::StorageResult;
use rolodex::models::AddressBook;
use rolodex::storage::SnapshotStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock snapshot store for testing.
///
/// Serves a configurable book on load, captures the last saved book, and
/// tracks method calls for verification.
#[allow(dead_code)]
pub struct MockSnapshotStore {
    book: Mutex<AddressBook>,
    saved: Mutex<Option<AddressBook>>,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockSnapshotStore {
    /// Create a mock store that loads an empty book.
    pub fn new() -> Self {
        Self::with_book(AddressBook::new())
    }

    /// Create a mock store that loads the given book.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book: Mutex::new(book),
            saved: Mutex::new(None),
            call_counts: Mutex::new(HashMap::new()),
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Get the book most recently passed to `save`, if any.
    pub fn last_saved(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.book.lock().unwrap().clone())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
