//! The address book and its birthday-window query.

pub mod address_book;
pub mod upcoming;

pub use address_book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use upcoming::UpcomingBirthday;
