//! Contact Directory - a command-line assistant bot for a personal contact
//! directory with birthday reminders.
//!
//! The assistant stores names, phone numbers, and birthdays, supports
//! lookup/edit/delete, and computes which contacts have birthdays in an
//! upcoming window, shifting weekend congratulation dates to the next Monday.
//! The directory is persisted as a snapshot file between runs.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the contact record aggregate
//! - **book**: the address book and its birthday-window query
//! - **storage**: the snapshot persistence boundary
//! - **view**: the user interface boundary (console + test doubles)
//! - **commands**: command parsing and handlers
//! - **repl**: the control loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;
pub mod view;

pub use book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use commands::{dispatch, parse_input, Command, ParsedInput};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, SnapshotError};
pub use models::Record;
pub use storage::{FileSnapshotStore, SnapshotStore};
pub use view::{ConsoleView, View};
