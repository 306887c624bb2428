use crate::error::StorageResult;
use crate::models::AddressBook;

/// Persistence boundary for the address book snapshot.
///
/// The book is read once at startup and written back once at shutdown;
/// implementations persist the whole state each time.
pub trait SnapshotStore {
    /// Loads the last saved snapshot, or an empty book when none exists.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Saves the full snapshot, replacing any previous one.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
