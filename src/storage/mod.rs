//! Snapshot persistence boundary.

pub mod file_store;
pub mod traits;

pub use file_store::FileSnapshotStore;
pub use traits::SnapshotStore;
