//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Lookups, traversals and rendering are the plain [`Tree`] ones. Only `insert` and `delete`
//! differ: after the tree's shape changed they walk back up from the change to the root,
//! recomputing heights and rotating wherever a node became too lopsided.
//!
//! # Examples
//!
//! ```
//! use avl_index::{Avl, TreeNode};
//!
//! let mut tree = Avl::new();
//! for key in 1..=7 {
//!     tree.insert(key, key * 2);
//! }
//!
//! // Ascending inserts would make a plain BST a linked list.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(4));
//! assert_eq!(tree.find(&5), Some(&10));
//!
//! assert_eq!(tree.delete(&4), Ok(8));
//! assert_eq!(tree.inorder_traversal(), vec![1, 2, 3, 5, 6, 7]);
//! ```

use std::fmt;
use std::ops::Deref;

use crate::error::{Result, TreeError};
use crate::iter::Iter;
use crate::node::{AvlNode, Direction, TreeNode};
use crate::tree::Tree;

/// An AVL tree. After every `insert` and `delete` the heights of the two subtrees of any node
/// differ by at most one, so the tree's height stays `O(lg N)`.
///
/// All read-only operations are those of [`Tree`] and are reached through `Deref`.
#[derive(Clone, Debug)]
pub struct Avl<K, V> {
    tree: Tree<AvlNode<K, V>>,
}

impl<K, V> Default for Avl<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Deref for Avl<K, V> {
    type Target = Tree<AvlNode<K, V>>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl<K: fmt::Display, V> fmt::Display for Avl<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}

impl<'a, K, V> IntoIterator for &'a Avl<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, AvlNode<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.iter()
    }
}

impl<K, V> Avl<K, V> {
    /// Generate a new, empty `Avl`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The cached height of the root. `-1` for an empty tree.
    pub fn height(&self) -> isize {
        self.tree.root().map_or(-1, AvlNode::height)
    }
}

impl<K: Ord, V> Avl<K, V> {
    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value without restructuring anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::{Avl, TreeNode};
    ///
    /// let mut tree = Avl::new();
    /// tree.insert(3, "c");
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// // The left-left shape was rotated right.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    ///
    /// tree.insert(1, "A");
    /// assert_eq!(tree.find(&1), Some(&"A"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(existing) = self.tree.find_mut(&key) {
            *existing = value;
            return;
        }
        let path = self.tree.attach(key, value);
        self.rebalance_above(&path);
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain the key, nothing happens and [`TreeError::NoItem`] is returned.
    ///
    /// When the key's node has two children its in-order successor is what physically leaves the
    /// tree, so rebalancing starts from the successor's old parent.
    pub fn delete(&mut self, key: &K) -> Result<V> {
        let Some((value, path)) = self.tree.detach(key) else {
            tracing::debug!("delete of absent key");
            return Err(TreeError::NoItem);
        };
        self.rebalance_above(&path);
        Ok(value)
    }

    /// Walks from the parent of the slot at the end of `path` up to the root, fixing heights and
    /// rebalancing on the way.
    fn rebalance_above(&mut self, path: &[Direction]) {
        if let Some((_, ancestors)) = path.split_last() {
            retrace(self.tree.root_slot(), ancestors);
        }
    }
}

impl<K: Ord, V: Default> Avl<K, V> {
    /// Builds a tree out of keys given in ascending order, exactly like
    /// [`Tree::create_balanced`]. The result already satisfies the AVL invariant.
    pub fn create_balanced<I>(sorted_keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            tree: Tree::create_balanced(sorted_keys),
        }
    }
}

/// Follows `path` down from the node in `slot` and then, on the way back up, updates the height
/// of every node passed and rebalances the ones that are off by more than one.
///
/// Rotations keep a node's position in the tree, only the entry it holds changes. So positions
/// below the current one never need to be revisited and positions above it are still where the
/// path says they are.
fn retrace<K, V>(slot: &mut Option<Box<AvlNode<K, V>>>, path: &[Direction]) {
    let Some(node) = slot.as_deref_mut() else {
        return;
    };
    if let Some((&direction, rest)) = path.split_first() {
        retrace(node.child_slot(direction), rest);
    }

    node.update_height();
    let balance = node.balance_factor();
    if balance.abs() > 1 {
        tracing::trace!(balance, "rebalancing");
        node.rebalance();
    }
}
