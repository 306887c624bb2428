//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
///
/// Each variant carries the rejected input for diagnostics; the `Display`
/// text is the exact message surfaced at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is malformed or not a real calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
