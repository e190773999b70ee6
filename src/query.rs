//! Read-only questions about the shape of a tree. Every function takes the root of a (sub)tree as
//! an `Option<&Node>` so it can be pointed at any node, and treats `None` as the empty tree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{query, Tree};
//!
//! let mut tree: Tree<i32, ()> = Tree::new();
//! for key in [3, 1, 4, 6, 9, 2, 5, 7] {
//!     tree.insert_key(key);
//! }
//!
//! // The longest path is 3 -> 4 -> 6 -> 9 -> 7.
//! assert_eq!(query::height(tree.root()), 5);
//! assert!(query::is_valid_bst(tree.root(), None, None));
//! assert!(!query::is_balanced(tree.root()));
//! ```

use std::ops::Add;

use crate::tree::Node;

/// Number of nodes on the longest path from `node` down to a leaf. An empty tree has height 0
/// and a lone node has height 1.
pub fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
}

/// Checks that every key below `node` lies strictly between the bounds inherited from its
/// ancestors. Pass `None` for both bounds to check a whole tree.
///
/// Going left the node's key becomes the upper bound, going right it becomes the lower bound, so
/// a duplicate key (which [`Tree::insert`][crate::Tree::insert] puts on the right) fails the
/// check.
pub fn is_valid_bst<'a, K, V>(
    node: Option<&'a Node<K, V>>,
    min: Option<&'a K>,
    max: Option<&'a K>,
) -> bool
where
    K: Ord,
{
    let Some(n) = node else {
        return true;
    };

    if min.map_or(false, |min| n.key() <= min) || max.map_or(false, |max| n.key() >= max) {
        return false;
    }

    is_valid_bst(n.left(), min, Some(n.key())) && is_valid_bst(n.right(), Some(n.key()), max)
}

/// Whether the two subtrees of `node` differ in height by at most one.
///
/// Only `node` itself is checked, not its descendants: a tree whose root is balanced can still
/// have lopsided subtrees.
pub fn is_balanced<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(true, |n| height(n.left()).abs_diff(height(n.right())) <= 1)
}

/// Walks down from `node`, stepping to the right child or, when there is none, to the left
/// child. Once three nodes have been visited the first of them (`node` itself) is returned. If
/// the walk runs out of nodes first the result is `None`.
///
/// This is not the third largest key in general: it never backtracks, so it only inspects a
/// single downward path.
pub fn third_largest_by_right_spine<K, V>(node: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
    let mut visited = Vec::with_capacity(3);
    let mut current = node;

    while let Some(n) = current {
        visited.push(n);
        if visited.len() == 3 {
            return visited.first().copied();
        }
        current = n.right().or_else(|| n.left());
    }

    None
}

/// Decides whether inserting `a` and `b` (each in order, into an empty tree) would build trees
/// of the same shape with the same keys in the same places, without building either tree.
///
/// # Examples
///
/// ```
/// use ordered_tree::query::same_structure_from_sequences;
///
/// assert!(same_structure_from_sequences(&[3, 5, 4, 6, 1, 0, 2], &[3, 1, 5, 2, 4, 6, 0]));
/// assert!(!same_structure_from_sequences(&[3, 2, 5, 4, 6, 1, 0], &[3, 1, 5, 2, 4, 6, 0]));
/// ```
pub fn same_structure_from_sequences<T>(a: &[T], b: &[T]) -> bool
where
    T: Ord,
{
    let a = a.iter().collect::<Vec<_>>();
    let b = b.iter().collect::<Vec<_>>();
    same_structure(&a, &b)
}

/// Recursive helper for [`same_structure_from_sequences`].
fn same_structure<T>(a: &[&T], b: &[&T]) -> bool
where
    T: Ord,
{
    if a.len() != b.len() {
        return false;
    }
    // Equal lengths, so either both are empty or neither is.
    let (Some((root_a, rest_a)), Some((root_b, rest_b))) = (a.split_first(), b.split_first())
    else {
        return true;
    };
    if root_a != root_b {
        return false;
    }

    // Both sequences now share a root. Anything smaller lands in its left subtree, anything else
    // (duplicates included) in its right one, and relative order is kept within each side.
    let (left_a, right_a): (Vec<&T>, Vec<&T>) = rest_a.iter().copied().partition(|x| x < root_a);
    let (left_b, right_b): (Vec<&T>, Vec<&T>) = rest_b.iter().copied().partition(|x| x < root_b);

    same_structure(&left_a, &left_b) && same_structure(&right_a, &right_b)
}

/// Adds up the values of every node below `node`, left subtree first. An empty tree sums to
/// `V::default()`.
pub fn sum_values<K, V>(node: Option<&Node<K, V>>) -> V
where
    V: Clone + Default + Add<Output = V>,
{
    match node {
        None => V::default(),
        Some(n) => sum_values(n.left()) + n.value().clone() + sum_values(n.right()),
    }
}
