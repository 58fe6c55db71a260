//! Record model representing one person in the contact directory.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The phone list is append-only and keeps duplicates; adding the same
/// number twice yields two entries. All mutation goes through the validated
/// operations below so an invalid value can never land on a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name; also the address book key
    pub name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Optional birthday in canonical DD.MM.YYYY form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with a name only.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate and append a phone number.
    ///
    /// No uniqueness check is applied; the same number may appear twice.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already-validated phone number.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone entry whose value equals `raw` exactly.
    ///
    /// Silently does nothing when no entry matches.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replace the first phone entry equal to `old` with the validated `new`
    /// value.
    ///
    /// The new number is validated before any mutation, so a failed edit
    /// leaves the phone list untouched.
    ///
    /// # Errors
    ///
    /// - `CommandError::Validation` if `new` is not a valid phone number.
    /// - `CommandError::PhoneNotFound` if no entry equals `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let replacement = PhoneNumber::new(new)?;

        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(CommandError::PhoneNotFound(old.to_string())),
        }
    }

    /// Validate and set the birthday, overwriting any previous value.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Render the phone list as a semicolon-joined string.
    pub fn phones_line(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_line()
        )?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
