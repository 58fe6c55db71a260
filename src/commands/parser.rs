//! Command-line parsing for the assistant REPL.

use std::str::FromStr;

/// Command keywords understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Greeting
    Hello,
    /// Create-or-update a contact and append a phone
    Add,
    /// Replace a phone number on a contact
    Change,
    /// Show a contact's phone numbers
    Phone,
    /// Render the whole directory
    All,
    /// Attach a birthday to a contact
    AddBirthday,
    /// Show a contact's birthday
    ShowBirthday,
    /// Upcoming birthdays within the configured window
    Birthdays,
    /// Save the snapshot and terminate
    Exit,
    /// Anything not recognized
    Unknown,
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown,
        })
    }
}

/// A parsed input line: the command keyword plus its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The recognized command
    pub command: Command,

    /// Arguments exactly as typed, in order
    pub args: Vec<String>,
}

/// Split one input line into a command and its arguments.
///
/// Tokens are whitespace-separated; the keyword is matched case-insensitively
/// while arguments keep their original casing. Returns `None` for blank
/// lines, which the control loop silently re-prompts on.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?;

    let command = keyword
        .parse()
        .unwrap_or(Command::Unknown);

    Some(ParsedInput {
        command,
        args: tokens.map(str::to_string).collect(),
    })
}
