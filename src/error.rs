//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a single command.
///
/// Every variant is recoverable and command-scoped: the handler that fails
/// leaves the address book in its pre-call state and the control loop moves
/// on to the next command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A field value failed validation; rendered verbatim at the boundary
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The phone number to edit or remove is not on the record
    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    /// No record exists under the requested name
    #[error("Contact not found")]
    ContactNotFound,

    /// The command line carried fewer arguments than the command needs
    #[error("Not enough argument for the command")]
    InsufficientArguments,
}

/// Errors that can occur while loading or saving a directory snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but could not be decoded
    #[error("Snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with SnapshotError
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
