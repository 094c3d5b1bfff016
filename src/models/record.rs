//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which stored phone numbers [`Record::edit_phone`] replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneTarget<'a> {
    /// Every stored phone equal to this value
    Matching(&'a str),

    /// The phone at this position, if in bounds
    Index(usize),
}

impl Default for PhoneTarget<'_> {
    fn default() -> Self {
        PhoneTarget::Index(0)
    }
}

/// A contact: a name, an ordered list of phones and an optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a contact with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a contact from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<&[PhoneNumber], ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(&self.phones)
    }

    /// Remove every stored phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> &[PhoneNumber] {
        self.phones.retain(|p| p.as_str() != phone);
        &self.phones
    }

    /// Replace the phones selected by `target` with `new_phone`.
    ///
    /// `new_phone` is validated first, so an invalid value is reported even
    /// when the target selects nothing. A target that selects nothing is a
    /// silent no-op.
    pub fn edit_phone(
        &mut self,
        new_phone: &str,
        target: PhoneTarget<'_>,
    ) -> Result<&[PhoneNumber], ValidationError> {
        let new_phone = PhoneNumber::new(new_phone)?;

        match target {
            PhoneTarget::Matching(old) => {
                for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
                    *phone = new_phone.clone();
                }
            }
            PhoneTarget::Index(index) => {
                if let Some(phone) = self.phones.get_mut(index) {
                    *phone = new_phone;
                }
            }
        }

        Ok(&self.phones)
    }

    /// First stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and store a birthday, replacing any existing one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<&Birthday, ValidationError> {
        Ok(&*self.birthday.insert(Birthday::new(raw)?))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "not set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("John").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn phone_strs(record: &Record) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_new_record_rejects_blank_name() {
        assert_eq!(Record::new("  "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_preserves_order_and_duplicates() {
        let mut record = record_with_phones(&["1234567890", "5555555555"]);
        let phones = record.add_phone("1234567890").unwrap();
        assert_eq!(phones.len(), 3);
        assert_eq!(
            phone_strs(&record),
            vec!["1234567890", "5555555555", "1234567890"]
        );
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_untouched() {
        let mut record = record_with_phones(&["1234567890"]);
        assert!(record.add_phone("12345").is_err());
        assert_eq!(phone_strs(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_remove_phone_removes_all_occurrences() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111");
        assert_eq!(phone_strs(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = record_with_phones(&["1111111111"]);
        record.remove_phone("9999999999");
        assert_eq!(phone_strs(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_by_value_replaces_every_match() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        record
            .edit_phone("3333333333", PhoneTarget::Matching("1111111111"))
            .unwrap();
        assert_eq!(
            phone_strs(&record),
            vec!["3333333333", "2222222222", "3333333333"]
        );
    }

    #[test]
    fn test_edit_phone_by_index() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        record.edit_phone("3333333333", PhoneTarget::Index(1)).unwrap();
        assert_eq!(phone_strs(&record), vec!["1111111111", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_defaults_to_first() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        record
            .edit_phone("3333333333", PhoneTarget::default())
            .unwrap();
        assert_eq!(phone_strs(&record), vec!["3333333333", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_without_match_is_noop() {
        let mut record = record_with_phones(&["1111111111"]);
        record
            .edit_phone("3333333333", PhoneTarget::Matching("9999999999"))
            .unwrap();
        record.edit_phone("3333333333", PhoneTarget::Index(5)).unwrap();
        assert_eq!(phone_strs(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_validates_even_without_match() {
        let mut record = Record::new("John").unwrap();
        let result = record.edit_phone("bad", PhoneTarget::Index(0));
        assert_eq!(result, Err(ValidationError::InvalidPhone("bad".to_string())));
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.find_phone("2222222222").map(PhoneNumber::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("3333333333").is_none());
    }

    #[test]
    fn test_add_birthday_replaces_existing() {
        let mut record = Record::new("Jane").unwrap();
        record.add_birthday("30.10.1990").unwrap();
        let birthday = record.add_birthday("1.1.1991").unwrap();
        assert_eq!(birthday.to_string(), "01.01.1991");
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1991");
    }

    #[test]
    fn test_add_invalid_birthday_keeps_previous() {
        let mut record = Record::new("Jane").unwrap();
        record.add_birthday("30.10.1990").unwrap();
        assert!(record.add_birthday("1990.10.30").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "30.10.1990");
    }

    #[test]
    fn test_display() {
        let mut record = record_with_phones(&["1234567890", "5555555555"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: not set"
        );

        record.add_birthday("3.11.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 03.11.1990"
        );
    }

    #[test]
    fn test_serialization() {
        let mut record = record_with_phones(&["1234567890"]);
        record.add_birthday("30.10.1990").unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "John",
                "phones": ["1234567890"],
                "birthday": "30.10.1990"
            })
        );

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialization_validates_fields() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "John", "phones": ["12"]}"#);
        assert!(result.is_err());
    }
}
