//! Contact Book - an in-memory address book with an upcoming-birthdays planner.
//!
//! The library keeps contacts (a name, phone numbers, an optional birthday)
//! in an [`AddressBook`] and answers "whose birthday should I celebrate this
//! week?" for any given day. A small command assistant sits on top for the
//! interactive binary.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone number, birthday)
//! - **models**: The contact [`Record`]
//! - **book**: The [`AddressBook`] and the birthday planner
//! - **matching**: Fuzzy name and exact phone search
//! - **assistant**: Command parsing, dispatch and user-facing messages
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use assistant::{Assistant, Clock, Confirmation, FixedClock, Reply, SystemClock};
pub use book::{AddressBook, WeekSchedule};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use matching::{ContactMatcher, MatchResult, MatchType};
pub use models::{PhoneTarget, Record};
