//! This crate exposes a plain, unbalanced Binary Search Tree (BST) and a handful of algorithms
//! that answer questions about its shape, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`Tree`] never rebalances, so the order of insertion alone decides its shape: inserting
//! sorted keys produces a linked list of height `N`. It also admits duplicate keys (to the right
//! of the existing key), which breaks invariant 2. The functions in [`query`] can detect both.
//!
//! ## Example
//!
//! ```
//! use ordered_tree::{query, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [3, 1, 4, 6, 9, 2, 5, 7] {
//!     tree.insert(key, key * 10);
//! }
//!
//! assert_eq!(tree.find(&6), Ok(&60));
//! // Height counts nodes: the longest path is 3 -> 4 -> 6 -> 9 -> 7.
//! assert_eq!(tree.height(), 5);
//! assert!(tree.is_valid());
//! assert_eq!(query::sum_values(tree.root()), 370);
//!
//! // Children can be inserted in either order as long as each parent comes first.
//! assert!(query::same_structure_from_sequences(&[2, 1, 3], &[2, 3, 1]));
//! assert!(!query::same_structure_from_sequences(&[3, 1, 2], &[3, 2, 1]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod query;
pub mod tree;
mod util;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}

pub use error::TreeError;
pub use tree::{Node, Tree};
