//! Property-based tests for the tree store's algebraic guarantees

mod tree_invariants;
