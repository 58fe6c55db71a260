//! Command parsing and handling for the assistant REPL.

pub mod handlers;
pub mod parser;

pub use handlers::dispatch;
pub use parser::{parse_input, Command, ParsedInput};
