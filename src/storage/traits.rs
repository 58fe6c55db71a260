use crate::book::AddressBook;
use crate::error::SnapshotResult;

/// Snapshot store for the whole address book.
///
/// Provides abstraction over directory persistence, enabling different
/// implementations (file-backed, in-memory for tests). A snapshot is opaque
/// to the rest of the system: the only contract is that `save` followed by
/// `load` reproduces the book with full fidelity.
pub trait SnapshotStore {
    /// Load the previously saved address book.
    ///
    /// Returns an empty book when no snapshot exists; absence is not an
    /// error. A snapshot that exists but cannot be decoded is.
    fn load(&self) -> SnapshotResult<AddressBook>;

    /// Persist the full address book, replacing any previous snapshot.
    fn save(&self, book: &AddressBook) -> SnapshotResult<()>;
}
