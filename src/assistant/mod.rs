//! Command-driven front end over the address book.
//!
//! The assistant turns one line of user input into one reply. It owns the
//! address book for the lifetime of the session and is the only layer that
//! deals in user-facing text or asks follow-up questions.

pub mod command;
pub mod messages;

pub use command::{parse_input, Command};

use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::PhoneNumber;
use crate::error::{CommandError, CommandResult};
use crate::matching::ContactMatcher;
use crate::models::{PhoneTarget, Record};
use chrono::NaiveDate;
use std::io;

/// Source of "today" for the birthday planner.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The user's answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Unrecognised,
}

impl Confirmation {
    /// Interpret a free-text answer, ignoring case and surrounding whitespace.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "yes" => Confirmation::Yes,
            "no" => Confirmation::No,
            _ => Confirmation::Unrecognised,
        }
    }
}

/// What to show the user after a command, and whether the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn goodbye() -> Self {
        Self {
            text: messages::GOODBYE.to_string(),
            exit: true,
        }
    }
}

/// Interactive assistant holding the session's address book.
pub struct Assistant<C = SystemClock> {
    book: AddressBook,
    config: Config,
    clock: C,
    matcher: ContactMatcher,
}

impl Assistant<SystemClock> {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Assistant<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            clock,
            matcher: ContactMatcher::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line of input.
    ///
    /// `ask` is called with a question when a command needs confirmation and
    /// must return the user's raw answer. Returns `None` for a blank line.
    /// Command failures become an explanatory reply; they never end the session.
    pub fn handle<F>(&mut self, line: &str, ask: F) -> Option<Reply>
    where
        F: FnMut(&str) -> io::Result<String>,
    {
        let (token, args) = parse_input(line)?;

        let reply = token
            .parse::<Command>()
            .and_then(|command| self.execute(command, &args, ask))
            .unwrap_or_else(|err| {
                tracing::warn!(command = %token, error = %err, "Command failed");
                Reply::say(messages::describe(&err))
            });

        Some(reply)
    }

    /// Run a parsed command.
    pub fn execute<F>(&mut self, command: Command, args: &[String], ask: F) -> CommandResult<Reply>
    where
        F: FnMut(&str) -> io::Result<String>,
    {
        tracing::debug!(command = command.token(), args = args.len(), "Executing command");

        match command {
            Command::Hello => Ok(Reply::say(messages::HELLO)),
            Command::Add => self.add_contact(command, args),
            Command::Change => self.change_phone(command, args, ask),
            Command::Phone => self.show_phone(command, args),
            Command::All => self.show_all(),
            Command::AddBirthday => self.add_birthday(command, args),
            Command::ShowBirthday => self.show_birthday(command, args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Delete => self.delete_contact(command, args),
            Command::Search => self.search(command, args),
            Command::Exit => Ok(Reply::goodbye()),
        }
    }

    /// Create a contact, or add another phone to an existing one.
    fn add_contact(&mut self, command: Command, args: &[String]) -> CommandResult<Reply> {
        let [name, phone] = args else {
            return Err(command.invalid_arguments());
        };

        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok(Reply::say(messages::PHONE_ADDED));
        }

        let mut record = Record::new(name.as_str())?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok(Reply::say(messages::CONTACT_ADDED))
    }

    /// Replace a contact's first phone after asking for confirmation.
    fn change_phone<F>(&mut self, command: Command, args: &[String], mut ask: F) -> CommandResult<Reply>
    where
        F: FnMut(&str) -> io::Result<String>,
    {
        let [name, new_phone] = args else {
            return Err(command.invalid_arguments());
        };

        let record = self.book.require_mut(name)?;
        PhoneNumber::new(new_phone.as_str())?;

        match Confirmation::from_answer(&ask(messages::CONFIRM_OVERWRITE)?) {
            Confirmation::Yes => {
                if record.phones().is_empty() {
                    record.add_phone(new_phone)?;
                } else {
                    record.edit_phone(new_phone, PhoneTarget::Index(0))?;
                }
                tracing::debug!(name = %name, "Phone changed");
                Ok(Reply::say(messages::CONTACT_CHANGED))
            }
            Confirmation::No => Ok(Reply::say(messages::CONTACT_NOT_CHANGED)),
            Confirmation::Unrecognised => Ok(Reply::say(messages::CONFIRM_INVALID)),
        }
    }

    fn show_phone(&self, command: Command, args: &[String]) -> CommandResult<Reply> {
        let [name] = args else {
            return Err(command.invalid_arguments());
        };

        let record = self.book.require(name)?;
        if record.phones().is_empty() {
            return Ok(Reply::say(messages::NO_PHONES));
        }

        let phones = record
            .phones()
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Ok(Reply::say(phones))
    }

    fn show_all(&self) -> CommandResult<Reply> {
        if self.book.is_empty() {
            return Err(CommandError::EmptyBook);
        }
        Ok(Reply::say(self.book.to_string()))
    }

    fn add_birthday(&mut self, command: Command, args: &[String]) -> CommandResult<Reply> {
        let [name, birthday] = args else {
            return Err(command.invalid_arguments());
        };

        self.book.require_mut(name)?.add_birthday(birthday)?;
        Ok(Reply::say(messages::BIRTHDAY_ADDED))
    }

    fn show_birthday(&self, command: Command, args: &[String]) -> CommandResult<Reply> {
        let [name] = args else {
            return Err(command.invalid_arguments());
        };

        let text = match self.book.require(name)?.birthday() {
            Some(birthday) => birthday.to_string(),
            None => messages::BIRTHDAY_NOT_SET.to_string(),
        };
        Ok(Reply::say(text))
    }

    fn birthdays(&self) -> Reply {
        let schedule = self.book.get_birthdays_in_week(self.clock.today());
        if schedule.is_empty() {
            Reply::say(messages::NO_BIRTHDAYS)
        } else {
            Reply::say(schedule.to_string())
        }
    }

    fn delete_contact(&mut self, command: Command, args: &[String]) -> CommandResult<Reply> {
        let [name] = args else {
            return Err(command.invalid_arguments());
        };

        self.book.require(name)?;
        self.book.delete(name);
        Ok(Reply::say(messages::CONTACT_DELETED))
    }

    fn search(&self, command: Command, args: &[String]) -> CommandResult<Reply> {
        if args.is_empty() {
            return Err(command.invalid_arguments());
        }

        let query = args.join(" ");
        let results = self.matcher.find_matches(
            &query,
            &self.book,
            self.config.search_max_results,
            self.config.search_min_confidence,
        );

        if results.is_empty() {
            return Ok(Reply::say(messages::NO_MATCHES));
        }

        let lines = results
            .iter()
            .map(|m| m.record.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Reply::say(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant() -> Assistant<FixedClock> {
        // 2024-06-10 is a Monday
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        Assistant::with_clock(Config::default(), FixedClock(today))
    }

    fn no_questions(question: &str) -> io::Result<String> {
        panic!("unexpected question: {question}")
    }

    fn run(assistant: &mut Assistant<FixedClock>, line: &str) -> String {
        assistant.handle(line, no_questions).unwrap().text
    }

    #[test]
    fn test_confirmation_from_answer() {
        assert_eq!(Confirmation::from_answer("Yes"), Confirmation::Yes);
        assert_eq!(Confirmation::from_answer(" no \n"), Confirmation::No);
        assert_eq!(Confirmation::from_answer("maybe"), Confirmation::Unrecognised);
    }

    #[test]
    fn test_blank_line_has_no_reply() {
        assert!(assistant().handle("   ", no_questions).is_none());
    }

    #[test]
    fn test_exit_ends_session() {
        let mut assistant = assistant();
        let reply = assistant.handle("close", no_questions).unwrap();
        assert!(reply.exit);
        assert_eq!(reply.text, "Good bye!");
    }

    #[test]
    fn test_add_twice_appends_phone() {
        let mut assistant = assistant();
        assert_eq!(run(&mut assistant, "add John 1234567890"), "Contact added.");
        assert_eq!(run(&mut assistant, "add John 5555555555"), "Phone added.");
        assert_eq!(run(&mut assistant, "phone John"), "1234567890, 5555555555");
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut assistant = assistant();
        let text = run(&mut assistant, "add John 12345");
        assert!(text.contains("10 digits"));
        assert!(assistant.book().is_empty());
    }

    #[test]
    fn test_change_validates_before_asking() {
        let mut assistant = assistant();
        run(&mut assistant, "add John 1234567890");
        let text = run(&mut assistant, "change John 12");
        assert!(text.contains("10 digits"));
    }

    #[test]
    fn test_clock_drives_birthdays() {
        let mut assistant = assistant();
        run(&mut assistant, "add Ann 1234567890");
        run(&mut assistant, "add-birthday Ann 13.06.1990");
        assert_eq!(run(&mut assistant, "birthdays"), "Thursday: Ann");
    }
}
