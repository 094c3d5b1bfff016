//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors that can occur while handling an assistant command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number of arguments for a command
    #[error("Invalid arguments for '{command}': expected {expected}")]
    InvalidArguments {
        command: &'static str,
        expected: &'static str,
    },

    /// Command token is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Listing requested on an empty book
    #[error("The address book is empty")]
    EmptyBook,

    /// Address book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Reading from or writing to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
