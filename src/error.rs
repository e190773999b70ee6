//! Errors returned by [`Tree`][crate::Tree] operations.

/// Errors triggered by tree lookups and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The traversal reached a node with no child on the side the key would be on, so the key
    /// is not in the tree.
    #[error("key not found")]
    KeyNotFound,
}
