//! Command-line parsing for the assistant.

use crate::error::CommandError;
use std::str::FromStr;

/// Split a line into a lower-cased command token and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Search,
    Exit,
}

impl Command {
    /// Canonical token for this command.
    pub fn token(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::Search => "search",
            Command::Exit => "exit",
        }
    }

    /// Argument synopsis shown in error messages.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Add | Command::Change => "<name> <phone>",
            Command::Phone | Command::ShowBirthday | Command::Delete => "<name>",
            Command::AddBirthday => "<name> <dd.mm.yyyy>",
            Command::Search => "<name or phone>",
            Command::Hello | Command::All | Command::Birthdays | Command::Exit => "no arguments",
        }
    }

    pub(crate) fn invalid_arguments(self) -> CommandError {
        CommandError::InvalidArguments {
            command: self.token(),
            expected: self.usage(),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" | "hi" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete),
            "search" => Ok(Command::Search),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}
