//! Upcoming-birthday projection.

use serde::Serialize;
use std::fmt;

/// One upcoming-birthday entry produced by the birthday query.
///
/// A transient projection, never persisted: the congratulation date is the
/// weekend-adjusted calendar date on which the greeting should be sent,
/// rendered in DD.MM.YYYY form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Weekend-adjusted greeting date, formatted DD.MM.YYYY
    pub congratulation_date: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let entry = UpcomingBirthday {
            name: "Bob".to_string(),
            congratulation_date: "17.06.2024".to_string(),
        };
        assert_eq!(entry.to_string(), "Bob: 17.06.2024");
    }
}
