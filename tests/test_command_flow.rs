//! End-to-end tests for the assistant control loop.
//!
//! These drive the full REPL through a scripted view and a real file-backed
//! snapshot store, validating the boundary messages from the command table.

mod mocks;

use contact_directory::storage::SnapshotStore;
use contact_directory::{repl, AddressBook, FileSnapshotStore};
use mocks::ScriptedView;
use tempfile::TempDir;

/// Run a script against an empty book and return (displayed lines, store dir).
fn run_script(script: &[&str]) -> (Vec<String>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("addressbook.json"));
    let mut book = store.load().unwrap();
    let mut view = ScriptedView::new(script);

    repl::run(&mut book, &mut view, &store, 7).unwrap();
    (view.outputs, dir)
}

#[test]
fn test_session_greets_and_says_goodbye() {
    let (outputs, _dir) = run_script(&["hello", "exit"]);
    assert_eq!(
        outputs,
        vec!["Welcome to the assistant bot!", "How can I help you?", "Good bye!"]
    );
}

#[test]
fn test_close_is_equivalent_to_exit() {
    let (outputs, _dir) = run_script(&["close"]);
    assert_eq!(outputs, vec!["Welcome to the assistant bot!", "Good bye!"]);
}

#[test]
fn test_eof_terminates_like_exit() {
    let (outputs, _dir) = run_script(&["hello"]);
    assert_eq!(outputs.last().unwrap(), "Good bye!");
}

#[test]
fn test_add_show_change_flow() {
    let (outputs, _dir) = run_script(&[
        "add John 0501234567",
        "add John 0679876543",
        "phone John",
        "change John 0501234567 0671112233",
        "phone John",
        "exit",
    ]);

    assert_eq!(
        outputs,
        vec![
            "Welcome to the assistant bot!",
            "Contact added.",
            "Contact updated.",
            "John: 0501234567; 0679876543",
            "Contact phone updated.",
            "John: 0671112233; 0679876543",
            "Good bye!",
        ]
    );
}

#[test]
fn test_error_messages_keep_the_loop_alive() {
    let (outputs, _dir) = run_script(&[
        "add John 123",
        "phone Ghost",
        "change Ghost 0501234567 0671112233",
        "add",
        "wat",
        "exit",
    ]);

    assert_eq!(
        outputs,
        vec![
            "Welcome to the assistant bot!",
            "The phone number must contain 10 digits",
            "Contact not found",
            "Contact not found",
            "Not enough argument for the command",
            "Invalid command.",
            "Good bye!",
        ]
    );
}

#[test]
fn test_blank_lines_are_silently_reprompted() {
    let (outputs, _dir) = run_script(&["", "   ", "hello", "exit"]);
    assert_eq!(
        outputs,
        vec!["Welcome to the assistant bot!", "How can I help you?", "Good bye!"]
    );
}

#[test]
fn test_birthday_commands() {
    let (outputs, _dir) = run_script(&[
        "add John 0501234567",
        "add-birthday John 24.08.1991",
        "show-birthday John",
        "show-birthday Ghost",
        "add-birthday John 1991.08.24",
        "exit",
    ]);

    assert_eq!(
        outputs,
        vec![
            "Welcome to the assistant bot!",
            "Contact added.",
            "Birthday added.",
            "John's birthday: 24.08.1991",
            "Birthday not found",
            "Invalid date format. Use DD.MM.YYYY",
            "Good bye!",
        ]
    );
}

#[test]
fn test_all_renders_directory_or_sentinel() {
    let (outputs, _dir) = run_script(&[
        "all",
        "add Ann 0501234567",
        "add Bob 0679876543",
        "all",
        "exit",
    ]);

    assert_eq!(outputs[1], "AddressBook is empty");
    assert_eq!(
        outputs[4],
        "Contact name: Ann, phones: 0501234567\nContact name: Bob, phones: 0679876543"
    );
}

#[test]
fn test_exit_saves_snapshot_for_the_next_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    // First session adds a contact and exits
    {
        let store = FileSnapshotStore::new(&path);
        let mut book = AddressBook::new();
        let mut view = ScriptedView::new(&["add John 0501234567", "exit"]);
        repl::run(&mut book, &mut view, &store, 7).unwrap();
    }

    // Second session sees it again
    let store = FileSnapshotStore::new(&path);
    let mut book = store.load().unwrap();
    let mut view = ScriptedView::new(&["phone John", "exit"]);
    repl::run(&mut book, &mut view, &store, 7).unwrap();

    assert!(view.outputs.contains(&"John: 0501234567".to_string()));
}
