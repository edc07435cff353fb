//! Tree persistence
//!
//! A `TreeStore` abstracts where the serialized tree lives between
//! invocations; the shipping backend is a single pretty-printed JSON file.

pub mod persistence;

pub use persistence::JsonFileStore;

use crate::error::StorageError;
use crate::tree::Tree;

/// Persistence interface for the whole tree: read once at startup, written
/// back wholesale at normal termination. No partial or incremental writes.
pub trait TreeStore {
    /// Load the persisted tree. A missing or empty backend yields an empty
    /// tree; only a malformed one is an error.
    fn load(&self) -> Result<Tree, StorageError>;

    /// Overwrite the backend with the current tree.
    fn save(&self, tree: &Tree) -> Result<(), StorageError>;
}
