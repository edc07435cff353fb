//! Recursive tree node: an insertion-ordered set of named children.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// One point in the hierarchy. A node carries no payload; it is exactly its
/// set of named children, which is also its serialized form: the JSON
/// representation of a node is the nested `name → children` object.
///
/// Children iterate in the order they were first created. LIST output and
/// the persistence round-trip both depend on that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node {
    children: LinkedHashMap<String, Node>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable child lookup.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Mutable child lookup.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Child lookup, materializing an empty node when absent. An existing
    /// child is returned undisturbed, keeping its position and subtree.
    pub fn child_or_create(&mut self, name: &str) -> &mut Node {
        self.children
            .entry(name.to_string())
            .or_insert_with(Node::new)
    }

    /// Attach `node` under `name`. A same-named child is overwritten in
    /// place (last-write-wins; its list position is kept).
    pub fn attach(&mut self, name: &str, node: Node) {
        self.children.replace(name.to_string(), node);
    }

    /// Detach and return the child subtree under `name`.
    pub fn detach(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }
}
