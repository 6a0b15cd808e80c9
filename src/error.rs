//! Error types for tree operations.

use thiserror::Error;

/// Result type alias using [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur when mutating a tree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The key wasn't found so nothing was deleted.
    #[error("key not found")]
    NoItem,
}
