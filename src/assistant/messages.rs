//! User-facing texts.
//!
//! Errors stay typed everywhere else; this is the only place they become prose.

use crate::domain::ValidationError;
use crate::error::{BookError, CommandError};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const HELLO: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";

pub const CONTACT_ADDED: &str = "Contact added.";
pub const PHONE_ADDED: &str = "Phone added.";
pub const CONTACT_CHANGED: &str = "Contact changed.";
pub const CONTACT_NOT_CHANGED: &str = "Contact not changed.";
pub const CONTACT_DELETED: &str = "Contact deleted.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const BIRTHDAY_NOT_SET: &str = "Birthday is not set.";
pub const NO_PHONES: &str = "No phone numbers saved.";
pub const NO_BIRTHDAYS: &str = "No birthdays this week";
pub const NO_MATCHES: &str = "No matching contacts.";

pub const CONFIRM_OVERWRITE: &str = "Existing contact will be overwritten. If you want to continue enter 'Yes', if not enter 'No' >>> ";
pub const CONFIRM_INVALID: &str = "Invalid input. Enter yes or no.";

/// Text shown to the user for a failed command.
pub fn describe(err: &CommandError) -> String {
    match err {
        CommandError::InvalidArguments { .. } => {
            "Invalid number of arguments. Please try again.".to_string()
        }
        CommandError::UnknownCommand(_) => "Invalid command.".to_string(),
        CommandError::EmptyBook => {
            "The list of contacts is empty! Add the contact first.".to_string()
        }
        CommandError::Book(BookError::ContactNotFound(_)) => {
            "Contact was not found. Ensure that you enter the right name and try again."
                .to_string()
        }
        CommandError::Book(BookError::Validation(err)) => describe_validation(err).to_string(),
        CommandError::Io(err) => format!("Could not read input: {}", err),
    }
}

fn describe_validation(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::EmptyName => "Invalid input. Contact name cannot be empty.",
        ValidationError::InvalidPhone(_) => {
            "Invalid input. Enter name and numeric phone number that has 10 digits."
        }
        ValidationError::InvalidBirthday(_) => {
            "Birthday should be in the following format: dd.mm.yyyy"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_each_kind() {
        assert_eq!(
            describe(&CommandError::UnknownCommand("x".to_string())),
            "Invalid command."
        );
        assert_eq!(
            describe(&CommandError::EmptyBook),
            "The list of contacts is empty! Add the contact first."
        );
        assert!(describe(&BookError::ContactNotFound("x".to_string()).into())
            .starts_with("Contact was not found."));
        assert!(describe(&ValidationError::InvalidPhone("1".to_string()).into())
            .contains("10 digits"));
        assert!(describe(&ValidationError::InvalidBirthday("1".to_string()).into())
            .contains("dd.mm.yyyy"));
    }
}
