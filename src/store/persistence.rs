//! JSON file backend for tree persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StorageError;
use crate::store::TreeStore;
use crate::tree::node::Node;
use crate::tree::Tree;

/// Default storage file name, relative to the working directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Stores the tree as one pretty-printed JSON document. Each node
/// serializes as the object of its children, so the whole file is the
/// nested `name → children` map and stays readable by hand.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TreeStore for JsonFileStore {
    fn load(&self) -> Result<Tree, StorageError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no storage file, starting with an empty tree");
            return Ok(Tree::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Tree::new());
        }

        let root: Node = serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        Ok(Tree::from_root(root))
    }

    fn save(&self, tree: &Tree) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(tree.root()).map_err(|e| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to serialize tree: {}", e),
            ))
        })?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "tree saved");
        Ok(())
    }
}
