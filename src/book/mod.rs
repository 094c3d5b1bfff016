//! In-memory address book.
//!
//! The book owns its records and keys them by contact name. Iteration follows
//! insertion order; replacing a record keeps the old one's position.

pub mod schedule;

pub use schedule::{birthdays_in_week, weekday_name, WeekSchedule, WINDOW_DAYS};

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// A name-keyed collection of contact records.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// An existing record with the same name is replaced wholesale and
    /// returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().as_str();

        match self.index.get(name) {
            Some(&position) => {
                tracing::debug!(name = %name, "Replacing existing record");
                Some(std::mem::replace(&mut self.records[position], record))
            }
            None => {
                tracing::debug!(name = %name, "Adding record");
                self.index.insert(name.to_string(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Like [`find`](Self::find), but a miss is an error.
    pub fn require(&self, name: &str) -> BookResult<&Record> {
        self.find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Like [`find_mut`](Self::find_mut), but a miss is an error.
    pub fn require_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(position) = self.index.remove(name) else {
            return false;
        };

        self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        tracing::debug!(name = %name, "Deleted record");
        true
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to congratulate during the week after `today`.
    ///
    /// See [`birthdays_in_week`] for the selection and weekend rules.
    pub fn get_birthdays_in_week(&self, today: NaiveDate) -> WeekSchedule {
        let schedule = birthdays_in_week(&self.records, today);
        tracing::debug!(
            today = %today,
            records = self.records.len(),
            days = schedule.len(),
            "Computed birthday schedule"
        );
        schedule
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
