//! Command handlers.
//!
//! Each handler translates one parsed command into address book operations
//! and returns either the success message for the boundary or a typed
//! [`CommandError`]. The dispatcher maps errors to display strings; handlers
//! never print anything themselves. A failing handler leaves the book in its
//! pre-call state.

use crate::book::AddressBook;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;

use super::parser::{Command, ParsedInput};

/// Route a parsed command to its handler.
///
/// `Exit` never reaches this function; the control loop intercepts it to run
/// the save-and-farewell sequence.
pub fn dispatch(input: &ParsedInput, book: &mut AddressBook, window_days: u32) -> CommandResult<String> {
    match input.command {
        Command::Hello => Ok(hello()),
        Command::Add => add_contact(&input.args, book),
        Command::Change => change_contact(&input.args, book),
        Command::Phone => show_phone(&input.args, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(&input.args, book),
        Command::ShowBirthday => show_birthday(&input.args, book),
        Command::Birthdays => Ok(birthdays(book, window_days)),
        Command::Exit => Ok(String::new()),
        Command::Unknown => Ok("Invalid command.".to_string()),
    }
}

/// `hello`
fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create-or-update the record, append the phone.
///
/// The phone is validated before the record is touched, so an invalid number
/// never leaves a half-created contact behind.
fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };

    let phone = PhoneNumber::new(phone.as_str())?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(ContactName::new(name.as_str())?);
    record.push_phone(phone);
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace a phone number.
fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact phone updated.".to_string())
}

/// `phone <name>`: show the contact's phone numbers.
fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    Ok(format!("{}: {}", name, record.phones_line()))
}

/// `all`: render the whole directory, or the empty sentinel.
fn show_all(book: &AddressBook) -> String {
    book.to_string()
}

/// `add-birthday <name> <DD.MM.YYYY>`: attach a birthday.
fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: show the stored birthday.
///
/// A missing contact and a contact without a birthday read the same at the
/// boundary: "Birthday not found".
fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InsufficientArguments);
    };

    match book.find(name).and_then(|r| r.birthday.as_ref()) {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok("Birthday not found".to_string()),
    }
}

/// `birthdays`: upcoming congratulation dates, one per line, in stored order.
fn birthdays(book: &AddressBook, window_days: u32) -> String {
    book.upcoming_birthdays(window_days)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
