//! An unbalanced BST. Nodes own their children through raw links and keep a non-owning link back
//! to their parent, so a node can be navigated both downwards and upwards.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), Err(TreeError::KeyNotFound));
//!
//! tree.insert(1, "one");
//! assert_eq!(tree.find(&1), Ok(&"one"));
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Ok("one"));
//! assert_eq!(tree.find(&1), Err(TreeError::KeyNotFound));
//! assert_eq!(tree.remove(&1), Err(TreeError::KeyNotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ptr::NonNull;

use crate::error::TreeError;
use crate::query;
use crate::util::RemoveResult;

/// A Binary Search Tree that never rebalances: the order of insertion alone decides its shape.
///
/// Keys equal to an existing key are admitted into the right subtree of the existing node. Such
/// a tree no longer satisfies the strict BST invariant (see [`Tree::is_valid`]).
pub struct Tree<K, V> {
    // This is a `Link` instead of an `Option<Box<Node>>` so that it can be moved around with the
    // `Tree` without the children's parent links breaking.
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.root.take().free();
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Link::clone_tree(self.root()),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
        }
    }

    /// The root node, or `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.root()
    }

    /// Number of nodes in the tree. Duplicate keys each count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Finds the value associated with the given key. The search stops at the first node holding
    /// an equal key, so with duplicate keys the one inserted first wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert_eq!(tree.find(&42), Err(TreeError::KeyNotFound));
    /// ```
    pub fn find(&self, key: &K) -> Result<&V, TreeError>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(&node.value),
                Ordering::Greater => node.right(),
            };
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "find: key not found");

        Err(TreeError::KeyNotFound)
    }

    /// Inserts the given value into the tree stored at the given key. The new node is always a
    /// leaf. Inserting a key that is already present does not overwrite it: a second node holding
    /// the same key is added to the right of the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// tree.insert(1, 3);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert!(!tree.is_valid());
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        self.root.insert(key, value);
        self.len += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "insert");
    }

    /// Inserts a key with the default value, for trees used as plain key sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<char, ()> = Tree::new();
    /// tree.insert_key('e');
    ///
    /// assert_eq!(tree.find(&'e'), Ok(&()));
    /// ```
    pub fn insert_key(&mut self, key: K)
    where
        K: Ord,
        V: Default,
    {
        self.insert(key, V::default());
    }

    /// Removes the node containing the given key from the tree and returns its value.
    ///
    /// A node with two children is not unlinked itself. Instead it takes over the key and value
    /// of its in-order successor (the smallest node of its right subtree) and the successor is
    /// unlinked in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    /// tree.insert(3, "three");
    ///
    /// assert_eq!(tree.remove(&2), Ok("two"));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.remove(&2), Err(TreeError::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V, TreeError>
    where
        K: Ord,
    {
        let result = match self.root.root_mut() {
            Some(root) => root.remove(key),
            None => RemoveResult::NotFound,
        };

        let value = match result {
            RemoveResult::RemoveSelf => self.root.splice_out().1,
            RemoveResult::Removed(value) => value,
            RemoveResult::NotFound => {
                #[cfg(feature = "tracing")]
                tracing::trace!(len = self.len, "remove: key not found");

                return Err(TreeError::KeyNotFound);
            }
        };
        self.len -= 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len, "remove");

        Ok(value)
    }

    /// Height of the tree. See [`query::height`].
    pub fn height(&self) -> usize {
        query::height(self.root())
    }

    /// Whether every key is strictly inside the bounds set by its ancestors. See
    /// [`query::is_valid_bst`].
    pub fn is_valid(&self) -> bool
    where
        K: Ord,
    {
        query::is_valid_bst(self.root(), None, None)
    }

    /// Whether the root's subtrees differ in height by at most one. See [`query::is_balanced`].
    pub fn is_balanced(&self) -> bool {
        query::is_balanced(self.root())
    }

    /// See [`query::third_largest_by_right_spine`].
    pub fn third_largest(&self) -> Option<&Node<K, V>> {
        query::third_largest_by_right_spine(self.root())
    }
}

struct Link<K, V>(Option<NonNull<Node<K, V>>>);

impl<K, V> Clone for Link<K, V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<K, V> Copy for Link<K, V> {}

impl<K, V> Link<K, V> {
    fn from_boxed(node: Box<Node<K, V>>) -> Self {
        Link(Some(NonNull::from(Box::leak(node))))
    }

    fn root(&self) -> Option<&Node<K, V>> {
        // SAFETY: If the node is not `None` then it is a valid `Node` allocated in
        // `Node::new_boxed` and owned by the tree this link belongs to. Because we take `&self`
        // here, the returned reference can't outlive a shared borrow of that tree, and the tree
        // only hands out `&mut Node`s behind `&mut self`.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn root_mut(&mut self) -> Option<&mut Node<K, V>> {
        // SAFETY: See `Link::root`. Only the owning slot (never a parent link) is dereferenced
        // mutably.
        unsafe { self.0.as_mut().map(|ptr| ptr.as_mut()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// Frees the node in this slot and its whole subtree.
    fn free(self) {
        let mut pending = vec![self];
        while let Some(Link(Some(ptr))) = pending.pop() {
            // SAFETY: Each node is owned by exactly one slot and every slot is popped once, so
            // the node is released once. It was allocated with `Box::new` in `Node::new_boxed`.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            pending.push(node.left);
            pending.push(node.right);
        }
    }

    /// Walks down from the subtree in this slot to the first empty child slot on the key's path
    /// and puts a new leaf there. Equal keys go right along with greater ones.
    fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut parent = Link(None);
        let mut slot = self;
        while let Some(mut ptr) = slot.0 {
            // SAFETY: See `Link::root_mut`. `ptr` is a copy of the pointer owned by `slot`.
            let node = unsafe { ptr.as_mut() };
            // The child's parent link is a copy of the owning pointer, not one taken from `node`,
            // so later borrows of the parent don't invalidate it.
            parent = Link(Some(ptr));
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *slot = Link::from_boxed(Node::new_boxed(key, value, parent));

        if cfg!(debug_assertions) {
            let leaf = slot.root().expect("Leaf was just inserted");
            assert_eq!(leaf.parent.0, parent.0);
            if let Some(parent) = leaf.parent() {
                match parent.left() {
                    Some(left) if std::ptr::eq(left, leaf) => assert!(leaf.key < parent.key),
                    _ => assert!(leaf.key >= parent.key),
                }
            }
        }
    }

    /// Unlinks the node in this slot, which must have at most one child. The child (if any) takes
    /// the node's place and inherits the node's parent.
    ///
    /// ## Panics
    ///
    /// When the slot is empty or the node has two children.
    fn splice_out(&mut self) -> (K, V) {
        let ptr = self.0.take().expect("Splicing out an empty slot");
        // SAFETY: The slot we just emptied was the only owner of the node. Its only other
        // references are its children's parent links and the single child gets re-pointed below,
        // so nothing can reach the node after this.
        let node = unsafe { Box::from_raw(ptr.as_ptr()) };
        let Node {
            key,
            value,
            left,
            right,
            parent,
        } = *node;

        let mut child = match (left.0, right.0) {
            (Some(_), Some(_)) => panic!("Splicing out a node with two children"),
            (Some(child), None) | (None, Some(child)) => Link(Some(child)),
            (None, None) => Link(None),
        };
        if let Some(child) = child.root_mut() {
            child.parent = parent;
        }
        *self = child;

        (key, value)
    }

    /// Unlinks the smallest node of the subtree in this slot and returns its key and value.
    fn take_min(&mut self) -> (K, V) {
        let node = self
            .root_mut()
            .expect("Taking the minimum of an empty subtree");
        if node.left.0.is_some() {
            node.left.take_min()
        } else {
            // The minimum has no left child so this is the zero- or one-child case.
            self.splice_out()
        }
    }
}

impl<K, V> Link<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Deep copies the tree rooted at `root`. Parent links in the copy are copies of the owning
    /// links in the copy.
    fn clone_tree(root: Option<&Node<K, V>>) -> Self {
        let Some(root) = root else {
            return Link(None);
        };

        let copy_root = Self::copy_of(root, Link(None));
        let mut pending = vec![(root, copy_root)];
        while let Some((original, mut copy)) = pending.pop() {
            let parent = copy;
            let node = copy.root_mut().expect("Copies are never empty");
            if let Some(left) = original.left() {
                node.left = Self::copy_of(left, parent);
                pending.push((left, node.left));
            }
            if let Some(right) = original.right() {
                node.right = Self::copy_of(right, parent);
                pending.push((right, node.right));
            }
        }

        copy_root
    }

    /// A childless copy of `node` hanging from `parent`.
    fn copy_of(node: &Node<K, V>, parent: Link<K, V>) -> Self {
        Link::from_boxed(Node::new_boxed(node.key.clone(), node.value.clone(), parent))
    }
}

/// A single element of a [`Tree`]: a key used for searching, the value associated with it, up to
/// two children, and a link back to the parent.
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    parent: Link<K, V>,
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V, parent: Link<K, V>) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: Link(None),
            right: Link(None),
            parent,
        })
    }

    /// The key this node is sorted by.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored alongside the key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Root of the left subtree, whose keys are all smaller than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.root()
    }

    /// Root of the right subtree, whose keys are all greater than (or, for duplicates, equal to)
    /// this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.root()
    }

    /// The node this one hangs from. `None` for the root.
    pub fn parent(&self) -> Option<&Self> {
        // Parents outlive their children, so this is as valid as `self`.
        self.parent.root()
    }

    fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.root_mut()
    }

    fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.root_mut()
    }

    /// Removes the node with the given `key` from this subtree. See the documentation on
    /// [`RemoveResult`] to see what the various return values mean.
    fn remove(&mut self, key: &K) -> RemoveResult<V>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => match self.left_mut().map(|n| n.remove(key)) {
                Some(RemoveResult::RemoveSelf) => RemoveResult::Removed(self.left.splice_out().1),
                Some(removed @ RemoveResult::Removed(_)) => removed,
                None | Some(RemoveResult::NotFound) => RemoveResult::NotFound,
            },
            Ordering::Equal => {
                if self.left.0.is_none() || self.right.0.is_none() {
                    // Our parent unlinks us and takes our value.
                    return RemoveResult::RemoveSelf;
                }

                #[cfg(feature = "tracing")]
                tracing::debug!("remove: promoting in-order successor");

                let (successor_key, successor_value) = self.right.take_min();
                self.key = successor_key;
                RemoveResult::Removed(std::mem::replace(&mut self.value, successor_value))
            }
            Ordering::Greater => match self.right_mut().map(|n| n.remove(key)) {
                Some(RemoveResult::RemoveSelf) => RemoveResult::Removed(self.right.splice_out().1),
                Some(removed @ RemoveResult::Removed(_)) => removed,
                None | Some(RemoveResult::NotFound) => RemoveResult::NotFound,
            },
        }
    }
}
