//! The address book: an insertion-ordered collection of records keyed by
//! contact name, plus the upcoming-birthday query.

use crate::models::Record;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::upcoming::UpcomingBirthday;

/// Default congratulation window, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// The full contact directory.
///
/// Records are keyed by exact contact name, at most one record per name.
/// Iteration order is insertion order; overwriting an existing name keeps
/// the record's original slot. The book exclusively owns its records: all
/// mutation goes through the operations below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any existing record under the same name.
    ///
    /// Overwrite replaces the prior record entirely; its phones and birthday
    /// are discarded, not merged. The slot position is preserved so `all`
    /// output stays stable.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name.as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.records[idx])
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(move |idx| &mut self.records[idx])
    }

    /// Remove the record under `name`, if any. No-op when absent.
    pub fn delete(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            self.records.remove(idx);
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in stored (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name.as_str() == name)
    }

    /// Contacts whose birthday falls within the next `window_days` days of
    /// the current local date, with weekend congratulation dates shifted to
    /// the following Monday.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// The pure core of the birthday query, computed against an explicit
    /// "today".
    ///
    /// For each record with a birthday, in stored order:
    /// 1. Project the birthday's month/day onto the current year.
    /// 2. If that date is strictly before today, move it to next year.
    ///    Today's own birthday stays at offset zero.
    /// 3. Keep the entry iff `0 <= days until <= window_days`.
    /// 4. Shift a Saturday or Sunday congratulation date to the next Monday;
    ///    weekday dates pass through untouched.
    ///
    /// Output order is stored order, not date order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(ref birthday) = record.birthday else {
                continue;
            };

            let mut this_year = project_onto_year(birthday.date(), today.year());
            if this_year < today {
                this_year = project_onto_year(birthday.date(), today.year() + 1);
            }

            let delta = (this_year - today).num_days();
            if delta < 0 || delta > i64::from(window_days) {
                continue;
            }

            let congratulation = adjust_for_weekend(this_year);
            upcoming.push(UpcomingBirthday {
                name: record.name.as_str().to_string(),
                congratulation_date: congratulation
                    .format(crate::domain::BIRTHDAY_FORMAT)
                    .to_string(),
            });
        }

        upcoming
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "AddressBook is empty");
        }
        let lines: Vec<String> = self.records.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Re-anchor a birthday's month and day onto `year`.
///
/// Feb 29 projected onto a non-leap year resolves to Mar 1.
fn project_onto_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday.with_year(year).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
    })
}

/// Shift weekend dates to the next Monday; weekday dates are returned as-is.
fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => find_next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// The smallest date strictly after `start` that falls on `weekday`.
fn find_next_weekday(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(start.weekday().num_days_from_monday());
    let ahead = if ahead <= 0 { ahead + 7 } else { ahead };
    start + Days::new(ahead as u64)
}
