//! Address book model and upcoming-birthday aggregation.

use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the upcoming-birthday report: who to congratulate and on
/// which date, formatted `YYYY.MM.DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: String,
}

/// All records, keyed by contact name.
///
/// The key always equals the record's own name. Iteration follows
/// insertion order; re-adding under an existing name replaces the record
/// in place, and deleting keeps the order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Inserts `record` under its own name, replacing any existing record
    /// with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record);
    }

    /// Looks up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Looks up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record with the given name. No-op when absent.
    pub fn delete(&mut self, name: &str) {
        self.records.shift_remove(name);
    }

    /// Iterates records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collects the birthdays falling within the next week and the dates
    /// on which to congratulate.
    ///
    /// A birthday qualifies when its next occurrence is 0 to 7 days from
    /// `today` inclusive. Occurrences on a Saturday or Sunday shift the
    /// congratulation to the following Monday; the shift may land past the
    /// 7-day window and is kept as is. Results follow record insertion
    /// order, not date order.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in self.records.values() {
            if let Some(birthday) = record.birthday() {
                let occurrence = birthday.next_occurrence(today);
                let days_until = (occurrence - today).num_days();
                if days_until > 7 {
                    continue;
                }
                let congratulation = occurrence + Duration::days(weekend_shift(occurrence));
                upcoming.push(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: congratulation.format("%Y.%m.%d").to_string(),
                });
            }
        }
        upcoming
    }
}

fn weekend_shift(occurrence: NaiveDate) -> i64 {
    match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    }
}
