//! Contact name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name, used as the lookup key in the address book.
///
/// Any non-empty token is accepted as given; matching elsewhere is
/// case-sensitive and exact.
///
/// # Examples
///
/// ```
/// use rolodex::domain::ContactName;
///
/// let name = ContactName::new("John");
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Creates a new contact name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
