//! Integration tests for the arbor virtual filesystem tree
