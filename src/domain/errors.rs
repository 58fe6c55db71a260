//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday string is not a valid DD.MM.YYYY date.
    InvalidDateFormat(String),

    /// The provided birthday lies in the future.
    FutureDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "The phone number must contain 10 digits"),
            Self::InvalidDateFormat(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
            Self::FutureDate(_) => {
                write!(f, "The date of birth cannot be greater than the current one.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_render_verbatim() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(err.to_string(), "The phone number must contain 10 digits");

        let err = ValidationError::InvalidDateFormat("2024-01-01".to_string());
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");

        let err = ValidationError::FutureDate("01.01.2999".to_string());
        assert_eq!(
            err.to_string(),
            "The date of birth cannot be greater than the current one."
        );
    }
}
