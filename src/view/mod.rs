//! User-facing view boundary.
//!
//! The control loop talks to the terminal only through the narrow [`View`]
//! trait, so tests can drive it with scripted input and capture output
//! without real terminal I/O.

pub mod console;

pub use console::ConsoleView;

use std::io;

/// Minimal capability set the control loop needs from a user interface.
pub trait View {
    /// Show a message to the user.
    fn display_message(&mut self, message: &str);

    /// Prompt for and read the next command line.
    ///
    /// Returns `None` on end of input (e.g. closed stdin), which the control
    /// loop treats the same as `exit`.
    fn input_command(&mut self, prompt: &str) -> io::Result<Option<String>>;
}
