//! Contact record model.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{CommandError, CommandResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact's full state: a name, any number of phones, and an
/// optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// repeat; deduplication is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Returns the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Returns the phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Returns the birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates `number` and appends it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for a malformed number; the
    /// phone list is left unchanged.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `number`. No-op when absent.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == number) {
            self.phones.remove(pos);
        }
    }

    /// Replaces `old` with `new`: `new` is validated and appended, then the
    /// first occurrence of `old` is removed.
    ///
    /// Adding before removing means a rejected `new` leaves the record
    /// exactly as it was, still holding `old`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if no phone equals `old`, or
    /// the validation error for a malformed `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        if self.find_phone(old).is_none() {
            return Err(CommandError::PhoneNotFound(old.to_string()));
        }
        self.add_phone(new)?;
        self.remove_phone(old);
        Ok(())
    }

    /// Returns the first phone equal to `number`, if any.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validates `date` and sets it as the birthday, replacing any
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for a malformed or
    /// impossible date; any existing birthday is kept.
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// Whole days from `today` to the next occurrence of the birthday.
    ///
    /// Returns `None` when no birthday is set and `Some(0)` when the
    /// birthday is today.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let next = birthday.next_occurrence(today);
        Some((next - today).num_days())
    }

    /// Renders the phone list as `"{p1}; {p2}; ..."`.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Renders the birthday reply: `"Birthday: {date}"` or
    /// `"Birthday not set."`.
    pub fn birthday_line(&self) -> String {
        match &self.birthday {
            Some(birthday) => format!("Birthday: {birthday}"),
            None => "Birthday not set.".to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}", self.name, self.phone_list())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        Ok(())
    }
}
