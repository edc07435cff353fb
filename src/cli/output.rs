//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::StorageError;

/// Map storage/config errors to a string for CLI output.
/// Keeps the route thin; extend with stable categories if needed.
pub fn map_error(e: &StorageError) -> String {
    e.to_string()
}
