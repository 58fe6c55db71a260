//! Integration tests for the snapshot persistence boundary.

use contact_directory::{
    AddressBook, ContactName, FileSnapshotStore, Record, SnapshotError, SnapshotStore,
};

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut ann = Record::new(ContactName::new("Ann").unwrap());
    ann.add_phone("0501234567").unwrap();
    ann.add_phone("0501234567").unwrap(); // duplicates survive persistence
    ann.add_phone("0679876543").unwrap();
    book.add_record(ann);

    let bob = Record::new(ContactName::new("Bob").unwrap());
    book.add_record(bob);

    book
}

#[test]
fn test_save_then_load_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("addressbook.json"));

    let book = sample_book();
    store.save(&book).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, book);

    // Phone order and duplicates are intact
    let ann = loaded.find("Ann").unwrap();
    let phones: Vec<_> = ann.phones.iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["0501234567", "0501234567", "0679876543"]);
}

#[test]
fn test_birthday_string_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("addressbook.json"));

    let mut book = AddressBook::new();
    let mut ann = Record::new(ContactName::new("Ann").unwrap());
    ann.add_phone("0501234567").unwrap();
    ann.add_birthday("24.08.1991").unwrap();
    book.add_record(ann);

    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    let birthday = loaded.find("Ann").unwrap().birthday.as_ref().unwrap();
    assert_eq!(birthday.as_str(), "24.08.1991");
}

#[test]
fn test_load_missing_file_returns_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("never-written.json"));

    let book = store.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_load_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = FileSnapshotStore::new(path);
    let result = store.load();
    assert!(matches!(result, Err(SnapshotError::Decode(_))));
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("addressbook.json"));

    store.save(&sample_book()).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_record(Record::new(ContactName::new("Only").unwrap()));
    store.save(&smaller).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find("Only").is_some());
}
