//! Phone number value object with validation.

use crate::domain::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A validated phone number: exactly 10 ASCII digits, no separators.
///
/// Validation happens at construction and at deserialization, so a value
/// of this type always holds a well-formed number.
///
/// # Examples
///
/// ```
/// use rolodex::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
///
/// assert!(PhoneNumber::new("123-456-7890").is_err());
/// assert!(PhoneNumber::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a new phone number after validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input is not exactly
    /// 10 ASCII digits.
    pub fn new(number: impl Into<String>) -> Result<Self, ValidationError> {
        let number = number.into();
        if !PHONE_REGEX.is_match(&number) {
            return Err(ValidationError::InvalidPhone(number));
        }
        Ok(Self(number))
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the phone number and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_too_short() {
        assert!(PhoneNumber::new("123456789").is_err());
    }

    #[test]
    fn test_phone_too_long() {
        assert!(PhoneNumber::new("12345678901").is_err());
    }

    #[test]
    fn test_phone_with_separators_rejected() {
        assert!(PhoneNumber::new("123-456-7890").is_err());
        assert!(PhoneNumber::new("123 456 7890").is_err());
    }

    #[test]
    fn test_phone_with_letters_rejected() {
        assert!(PhoneNumber::new("12345abcde").is_err());
    }

    #[test]
    fn test_phone_with_unicode_digits_rejected() {
        // Arabic-Indic digits are digits to `\d` but not ASCII.
        assert!(PhoneNumber::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_empty_phone_rejected() {
        assert!(PhoneNumber::new("").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = PhoneNumber::new("555").unwrap_err();
        assert_eq!(err.to_string(), "Phone number must be 10 digits.");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("0987654321").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0987654321\"");
    }

    #[test]
    fn test_phone_deserialization_validates() {
        let ok: Result<PhoneNumber, _> = serde_json::from_str("\"1234567890\"");
        assert!(ok.is_ok());

        let bad: Result<PhoneNumber, _> = serde_json::from_str("\"not-a-phone\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("5556667777").unwrap();
        assert_eq!(phone.to_string(), "5556667777");
    }
}
