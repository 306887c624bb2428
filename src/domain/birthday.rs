//! Birthday value object with validation and occurrence math.

use crate::domain::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date regex"));

/// A validated birthday in `DD.MM.YYYY` form.
///
/// The original text is kept alongside the parsed date so the value
/// displays exactly as it was entered. Both parts always agree because
/// construction is the only way to build one.
///
/// # Examples
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("05.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "05.06.1990");
///
/// assert!(Birthday::new("1990-06-05").is_err());
/// assert!(Birthday::new("31.02.2000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parses and validates a birthday string.
    ///
    /// The input must be zero-padded `DD.MM.YYYY` with ASCII digits and
    /// name a real calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` otherwise.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if !DATE_REGEX.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }
        match NaiveDate::parse_from_str(&raw, "%d.%m.%Y") {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Returns the birthday exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the next occurrence of this birthday on or after `today`.
    ///
    /// A Feb 29 birthday falls on Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        }
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        self.date.with_year(year).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
        })
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
