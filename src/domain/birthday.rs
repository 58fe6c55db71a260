//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical textual format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// Gate on the exact zero-padded shape before handing the string to chrono,
// which would otherwise accept single-digit days and months.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid regex literal"));

/// A type-safe wrapper for birthdays.
///
/// A birthday is a calendar date parsed strictly from `DD.MM.YYYY` and never
/// later than the current local date at construction time. The value round-trips
/// exactly: the stored string is the same canonical form it was validated in.
///
/// # Example
///
/// ```
/// use contact_directory::domain::Birthday;
///
/// let birthday = Birthday::new("24.08.1991").unwrap();
/// assert_eq!(birthday.as_str(), "24.08.1991");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from the canonical `DD.MM.YYYY` form, checked
    /// against the current local calendar date.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidDateFormat` if the string is not a valid
    ///   zero-padded `DD.MM.YYYY` calendar date.
    /// - `ValidationError::FutureDate` if the date is strictly after today.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new_with_today(raw, Local::now().date_naive())
    }

    /// Create a new Birthday validated against an explicit "today".
    ///
    /// The future-date check depends on the clock; taking the reference date
    /// as a parameter keeps the validation itself deterministic.
    pub fn new_with_today(
        raw: impl Into<String>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidDateFormat(raw));
        }

        let date = NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(raw.clone()))?;

        if date > today {
            return Err(ValidationError::FutureDate(raw));
        }

        Ok(Self { raw, date })
    }

    /// Get the birthday in its canonical `DD.MM.YYYY` form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the birthday as a calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// Serde support - serialize as the canonical string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string, re-checking the format only.
// The future-date rule applied at original entry time; a stored snapshot
// must load regardless of when it is read back.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(serde::de::Error::custom(ValidationError::InvalidDateFormat(raw)));
        }
        let date = NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT)
            .map_err(|_| serde::de::Error::custom(ValidationError::InvalidDateFormat(raw.clone())))?;
        Ok(Self { raw, date })
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
