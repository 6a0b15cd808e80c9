//! An unbalanced Binary Search Tree, generic over the kind of node it stores.
//!
//! [`Bst`] is the plain flavour. The [`Avl`][crate::Avl] tree stores
//! [`AvlNode`][crate::AvlNode]s in the same [`Tree`] and reuses everything here except `insert`
//! and `delete`.
//!
//! # Examples
//!
//! ```
//! use avl_index::{Bst, TreeError};
//!
//! let mut tree = Bst::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(&1), Some(&3));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Ok(3));
//! assert_eq!(tree.delete(&1), Err(TreeError::NoItem));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;

use crate::error::{Result, TreeError};
use crate::iter::Iter;
use crate::node::{Direction, Node, TreeNode};

/// A Binary Search Tree without any balancing.
pub type Bst<K, V> = Tree<Node<K, V>>;

/// A Binary Search Tree of `N` nodes. This can be used for inserting, finding, and deleting keys
/// and values. Keys are unique; inserting an existing key overwrites its value.
// TODO stack based Clone
#[derive(Clone, Debug)]
pub struct Tree<N: TreeNode> {
    root: Option<Box<N>>,
    len: usize,
}

impl<N: TreeNode> Default for Tree<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: TreeNode> Drop for Tree<N> {
    // Boxed children would otherwise be dropped recursively, one stack frame per level, which a
    // degenerate tree can turn into a stack overflow.
    fn drop(&mut self) {
        let mut stack: Vec<Box<N>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.child_slot(Direction::Left).take());
            stack.extend(node.child_slot(Direction::Right).take());
        }
    }
}

impl<N: TreeNode> Tree<N> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&N> {
        self.root.as_deref()
    }

    /// How many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of edges on the longest path from the root to a leaf. A tree with only a root
    /// has a height of 0 and an empty tree has a height of -1.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&N, isize)> = self.root().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Iterates over the entries of the tree in ascending key order.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(self.root())
    }

    /// Keys in left subtree, node, right subtree order. For a valid tree this is ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::Bst;
    ///
    /// let mut tree = Bst::new();
    /// for key in [5, 3, 8, 1, 4] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert_eq!(tree.inorder_traversal(), vec![1, 3, 4, 5, 8]);
    /// assert_eq!(tree.preorder_traversal(), vec![5, 3, 1, 4, 8]);
    /// assert_eq!(tree.postorder_traversal(), vec![1, 4, 3, 8, 5]);
    /// ```
    pub fn inorder_traversal(&self) -> Vec<N::Key>
    where
        N::Key: Clone,
    {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Keys in node, left subtree, right subtree order.
    pub fn preorder_traversal(&self) -> Vec<N::Key>
    where
        N::Key: Clone,
    {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&N> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(node.key().clone());
            // Right first so the left subtree is popped first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        keys
    }

    /// Keys in left subtree, right subtree, node order.
    pub fn postorder_traversal(&self) -> Vec<N::Key>
    where
        N::Key: Clone,
    {
        // Node, right, left visited with a stack is exactly the reverse of the post-order.
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&N> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(node.key().clone());
            stack.extend(node.left());
            stack.extend(node.right());
        }
        keys.reverse();
        keys
    }

    /// Finds the node holding the smallest key in the subtree rooted at `node`, i.e. keeps going
    /// left until there is no left child. Returns `node` itself when it has no left child.
    pub fn find_minimum(node: &N) -> &N {
        let mut current = node;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    pub(crate) fn root_slot(&mut self) -> &mut Option<Box<N>> {
        &mut self.root
    }

    /// The slot at the end of `path`. Every step of `path` but the last must lead to a node.
    fn slot_at(&mut self, path: &[Direction]) -> &mut Option<Box<N>> {
        let mut slot = &mut self.root;
        for &direction in path {
            slot = slot
                .as_mut()
                .expect("Path was recorded from existing nodes")
                .child_slot(direction);
        }
        slot
    }
}

impl<N> Tree<N>
where
    N: TreeNode,
    N::Key: Ord,
{
    /// Wraps an already built root. The caller must ensure the nodes below `root` are ordered;
    /// this is only checked in debug builds.
    pub fn from_root(root: Option<Box<N>>) -> Self {
        let mut tree = Self { root, len: 0 };
        tree.len = tree.iter().count();

        debug_assert!(
            tree.iter()
                .zip(tree.iter().skip(1))
                .all(|((a, _), (b, _))| a < b),
            "root must be a binary search tree with unique keys"
        );
        tree
    }

    /// Potentially finds the node holding the given key. If no node has the corresponding key,
    /// `None` is returned.
    pub fn find_node(&self, key: &N::Key) -> Option<&N> {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key()) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right(),
            }
        }
        None
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &N::Key) -> Option<&N::Value> {
        self.find_node(key).map(TreeNode::value)
    }

    /// Like [`Tree::find`] but allows the value to be modified in place.
    pub fn find_mut(&mut self, key: &N::Key) -> Option<&mut N::Value> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(node.key()) {
                Ordering::Less => current = node.child_slot(Direction::Left).as_deref_mut(),
                Ordering::Equal => return Some(node.value_mut()),
                Ordering::Greater => current = node.child_slot(Direction::Right).as_deref_mut(),
            }
        }
        None
    }

    /// Descends exactly like [`Tree::find_node`] and returns the last node visited before the
    /// key was reached. If the key isn't in the tree this is the node the key would be attached
    /// to. `None` when the tree is empty or the key is the root's.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::{Bst, TreeNode};
    ///
    /// let mut tree = Bst::new();
    /// for key in [5, 3, 8] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert_eq!(tree.find_parent(&3).map(|n| *n.key()), Some(5));
    /// assert_eq!(tree.find_parent(&9).map(|n| *n.key()), Some(8));
    /// assert!(tree.find_parent(&5).is_none());
    /// ```
    pub fn find_parent(&self, key: &N::Key) -> Option<&N> {
        let mut parent = None;
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key()) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => break,
                Ordering::Greater => current = node.right(),
            }
            parent = Some(node);
        }
        parent
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value and leaves the shape of the tree alone.
    pub fn insert(&mut self, key: N::Key, value: N::Value) {
        if let Some(existing) = self.find_mut(&key) {
            *existing = value;
            return;
        }
        self.attach(key, value);
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain the key, nothing happens and [`TreeError::NoItem`] is returned.
    pub fn delete(&mut self, key: &N::Key) -> Result<N::Value> {
        match self.detach(key) {
            Some((value, _)) => Ok(value),
            None => {
                tracing::debug!("delete of absent key");
                Err(TreeError::NoItem)
            }
        }
    }

    /// Hangs a new node for a key that isn't in the tree yet off the first empty slot found by
    /// descending from the root. Equal keys go right.
    ///
    /// Returns the directions taken from the root to the new node.
    pub(crate) fn attach(&mut self, key: N::Key, value: N::Value) -> Vec<Direction> {
        let mut path = Vec::new();
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            let direction = if *node.key() > key {
                Direction::Left
            } else {
                Direction::Right
            };
            path.push(direction);
            slot = node.child_slot(direction);
        }
        *slot = Some(Box::new(N::new(key, value)));
        self.len += 1;
        path
    }

    /// Physically removes one node so that `key` is no longer in the tree.
    ///
    /// A node with at most one child is removed itself and its child (if any) takes its slot.
    /// A node with two children instead takes over the entry of its in-order successor (the
    /// minimum of its right subtree) and the successor's node is removed in its place.
    ///
    /// Returns the value that was associated with `key` and the directions from the root to the
    /// slot of the node that was physically removed. `None` if `key` isn't in the tree.
    pub(crate) fn detach(&mut self, key: &N::Key) -> Option<(N::Value, Vec<Direction>)> {
        let mut path = Vec::new();
        let mut current = self.root();
        let target = loop {
            let node = current?;
            match key.cmp(node.key()) {
                Ordering::Less => {
                    path.push(Direction::Left);
                    current = node.left();
                }
                Ordering::Equal => break node,
                Ordering::Greater => {
                    path.push(Direction::Right);
                    current = node.right();
                }
            }
        };

        let target_depth = path.len();
        if let (Some(_), Some(right)) = (target.left(), target.right()) {
            path.push(Direction::Right);
            let mut successor = right;
            while let Some(left) = successor.left() {
                path.push(Direction::Left);
                successor = left;
            }
        }

        let slot = self.slot_at(&path);
        let mut removed = slot.take().expect("Removal path ends at a node");
        let orphan = removed
            .child_slot(Direction::Left)
            .take()
            .or_else(|| removed.child_slot(Direction::Right).take());
        *slot = orphan;
        self.len -= 1;

        let (successor_key, successor_value) = (*removed).into_entry();
        let value = if path.len() == target_depth {
            successor_value
        } else {
            let target = self
                .slot_at(&path[..target_depth])
                .as_deref_mut()
                .expect("Target sits above its successor");
            target.replace_entry(successor_key, successor_value).1
        };

        Some((value, path))
    }
}

impl<N> Tree<N>
where
    N: TreeNode,
    N::Key: Ord,
    N::Value: Default,
{
    /// Builds a balanced tree out of keys given in ascending order. Every value is
    /// `N::Value::default()`.
    ///
    /// The middle key (index `len / 2`) becomes the root and the keys before and after it are
    /// built into the left and right subtrees the same way. This is a one shot build: a [`Bst`]
    /// made this way is not kept balanced by later inserts or deletes.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::{Bst, TreeNode};
    ///
    /// let tree: Bst<i32, ()> = Bst::create_balanced([1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(4));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn create_balanced<I>(sorted_keys: I) -> Self
    where
        I: IntoIterator<Item = N::Key>,
    {
        let keys: Vec<N::Key> = sorted_keys.into_iter().collect();
        debug_assert!(
            keys.windows(2).all(|pair| pair[0] < pair[1]),
            "keys must be sorted and unique"
        );

        let len = keys.len();
        tracing::debug!(len, "building balanced tree");
        let root = build_balanced::<N, _>(&mut keys.into_iter(), len);
        Self { root, len }
    }
}

/// Builds a subtree out of the next `len` keys of `keys`. The left subtree gets the first
/// `len / 2` keys, the next key becomes the subtree root and the right subtree gets the rest.
fn build_balanced<N, I>(keys: &mut I, len: usize) -> Option<Box<N>>
where
    N: TreeNode,
    N::Value: Default,
    I: Iterator<Item = N::Key>,
{
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let left = build_balanced::<N, I>(keys, mid);
    let key = keys.next()?;
    let right = build_balanced::<N, I>(keys, len - mid - 1);

    let mut node = N::new(key, N::Value::default());
    *node.child_slot(Direction::Left) = left;
    *node.child_slot(Direction::Right) = right;
    node.refresh();
    Some(Box::new(node))
}

impl<'a, N: TreeNode> IntoIterator for &'a Tree<N> {
    type Item = (&'a N::Key, &'a N::Value);
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
