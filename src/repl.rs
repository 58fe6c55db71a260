//! The assistant control loop.
//!
//! One command is fully processed before the next is read. Command errors are
//! displayed and never fatal; the loop ends only on `close`/`exit` or end of
//! input, both of which save the snapshot before the farewell.

use crate::book::AddressBook;
use crate::commands::{dispatch, parse_input, Command};
use crate::storage::SnapshotStore;
use crate::view::View;
use anyhow::Result;
use tracing::{debug, warn};

/// Run the assistant until the user exits.
///
/// The view is the only I/O surface: scripted views make the whole loop
/// testable end to end. The snapshot is saved exactly once, on termination.
pub fn run<V, S>(
    book: &mut AddressBook,
    view: &mut V,
    store: &S,
    window_days: u32,
) -> Result<()>
where
    V: View,
    S: SnapshotStore,
{
    view.display_message("Welcome to the assistant bot!");

    loop {
        let Some(line) = view.input_command("Enter a command: ")? else {
            // Closed input behaves like `exit`
            debug!("End of input, shutting down");
            break;
        };

        let Some(parsed) = parse_input(&line) else {
            // Blank line: re-prompt without output
            continue;
        };

        if parsed.command == Command::Exit {
            break;
        }

        match dispatch(&parsed, book, window_days) {
            Ok(message) => view.display_message(&message),
            Err(e) => {
                warn!(command = ?parsed.command, error = %e, "Command failed");
                view.display_message(&e.to_string());
            }
        }
    }

    store.save(book)?;
    view.display_message("Good bye!");
    Ok(())
}
