//! In-memory hierarchy of named nodes
//!
//! The tree owns an unnamed root and resolves `/`-separated paths on every
//! operation by walking child links from it. A failed mutation leaves the
//! structure as it was, with one documented exception on the destination
//! side of a failed move.

pub mod node;
pub mod path;
pub mod walker;

use crate::error::StoreError;
use node::Node;

/// Owns the root node and implements the structural operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree around an existing root (used when loading persisted
    /// state).
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Materialize every missing segment along `path`. Existing nodes are
    /// left as they are, so repeating a create is a structural no-op.
    pub fn create(&mut self, path: &str) {
        let mut current = &mut self.root;
        for segment in path::segments(path) {
            current = current.child_or_create(segment);
        }
    }

    /// Relocate the subtree named by the last segment of `source` under the
    /// node named by `dest`, keeping its original name. A same-named child
    /// already at the destination is overwritten.
    ///
    /// Effects are ordered: the source prefix is checked first, then the
    /// full destination path is materialized, and only then is the item
    /// looked up under the source parent. Destination nodes created by the
    /// middle step survive a failing move.
    pub fn move_node(&mut self, source: &str, dest: &str) -> Result<(), StoreError> {
        let (prefix, item) = path::split_item(source);

        let mut probe = &self.root;
        for segment in &prefix {
            probe = probe.child(segment).ok_or_else(|| StoreError::NotFound {
                path: source.to_string(),
                segment: (*segment).to_string(),
            })?;
        }

        self.create(dest);

        let subtree = self
            .resolve_mut(&prefix)
            .and_then(|parent| parent.detach(item))
            .ok_or_else(|| StoreError::NotFound {
                path: source.to_string(),
                segment: item.to_string(),
            })?;

        // Walked with materialization: normally a pure lookup, but when the
        // destination ran through the detached subtree the missing segments
        // grow back empty, keeping the tree finite.
        let mut target = &mut self.root;
        for segment in path::segments(dest) {
            target = target.child_or_create(segment);
        }
        target.attach(item, subtree);
        Ok(())
    }

    /// Remove the node named by the last segment of `path`, together with
    /// its entire subtree. Every prefix segment must already exist.
    pub fn delete(&mut self, path: &str) -> Result<(), StoreError> {
        let (prefix, item) = path::split_item(path);

        let mut current = &mut self.root;
        for segment in &prefix {
            current = match current.child_mut(segment) {
                Some(child) => child,
                None => {
                    return Err(StoreError::NotFound {
                        path: path.to_string(),
                        segment: (*segment).to_string(),
                    })
                }
            };
        }

        if current.detach(item).is_none() {
            return Err(StoreError::NotFound {
                path: path.to_string(),
                segment: item.to_string(),
            });
        }
        Ok(())
    }

    /// Depth-first pre-order listing: one line per node, two spaces of
    /// indent per depth level, children in insertion order.
    pub fn list(&self) -> Vec<String> {
        walker::render(&self.root)
    }

    fn resolve_mut(&mut self, segments: &[&str]) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for segment in segments {
            current = current.child_mut(segment)?;
        }
        Some(current)
    }
}
