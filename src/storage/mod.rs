//! Snapshot persistence for the address book.

mod json_store;
mod traits;

pub use json_store::JsonSnapshotStore;
pub use traits::SnapshotStore;
