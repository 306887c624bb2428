//! Data models for the address book.

mod book;
mod record;

pub use book::{AddressBook, UpcomingBirthday};
pub use record::Record;
