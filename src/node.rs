//! The two node flavours stored in a [`Tree`][crate::Tree].
//!
//! A [`Node`] is the plain binary search tree node: a key, a value and at most two owned
//! children. An [`AvlNode`] additionally caches the height of the subtree rooted at it so the
//! AVL tree can read balance factors in constant time.
//!
//! Nodes never point at their parents. Anything that needs a node's ancestors either walks down
//! from the root again (see [`Tree::find_parent`][crate::Tree::find_parent]) or remembers the
//! [`Direction`]s it took on the way down.

use std::mem;

/// Which child of a node to follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards smaller keys.
    Left,
    /// Towards larger keys.
    Right,
}

mod sealed {
    pub trait Sealed {}

    impl<K, V> Sealed for super::Node<K, V> {}
    impl<K, V> Sealed for super::AvlNode<K, V> {}
}

/// Behaviour shared by every node that can live in a [`Tree`][crate::Tree]. The search, insert,
/// delete and traversal algorithms are written once against this trait.
///
/// This trait is sealed; the only implementors are [`Node`] and [`AvlNode`].
pub trait TreeNode: sealed::Sealed + Sized {
    /// The type used for searching/sorting.
    type Key;
    /// The type associated with each key.
    type Value;

    /// Creates a childless node.
    fn new(key: Self::Key, value: Self::Value) -> Self;

    /// The key stored at this node.
    fn key(&self) -> &Self::Key;

    /// The value stored at this node.
    fn value(&self) -> &Self::Value;

    /// Mutable access to the stored value. The key is never handed out mutably because changing
    /// it could break the ordering of the tree.
    fn value_mut(&mut self) -> &mut Self::Value;

    /// The child in the given direction, if any.
    fn child(&self, direction: Direction) -> Option<&Self>;

    /// The slot holding the child in the given direction.
    fn child_slot(&mut self, direction: Direction) -> &mut Option<Box<Self>>;

    /// Overwrites this node's key and value, returning the old ones. The node keeps its children
    /// and its position in the tree.
    fn replace_entry(&mut self, key: Self::Key, value: Self::Value) -> (Self::Key, Self::Value);

    /// Consumes the node, dropping its children and returning its key and value.
    fn into_entry(self) -> (Self::Key, Self::Value);

    /// Recomputes any cached data after the children of this node changed.
    fn refresh(&mut self) {}

    /// The left child, if any.
    fn left(&self) -> Option<&Self> {
        self.child(Direction::Left)
    }

    /// The right child, if any.
    fn right(&self) -> Option<&Self> {
        self.child(Direction::Right)
    }
}

/// A node of an unbalanced binary search tree.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> TreeNode for Node<K, V> {
    type Key = K;
    type Value = V;

    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    fn child_slot(&mut self, direction: Direction) -> &mut Option<Box<Self>> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (
            mem::replace(&mut self.key, key),
            mem::replace(&mut self.value, value),
        )
    }

    fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// A node of an AVL tree. Identical to [`Node`] plus the cached height of the subtree rooted at
/// this node.
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    key: K,
    value: V,
    left: Option<Box<AvlNode<K, V>>>,
    right: Option<Box<AvlNode<K, V>>>,

    /// How many edges lie on the longest path from this node down to a leaf. A node with no
    /// children has a height of 0 and a missing child counts as -1.
    height: isize,
}

/// Height of an optional subtree. An empty subtree has a height of -1.
fn height_of<K, V>(node: &Option<Box<AvlNode<K, V>>>) -> isize {
    node.as_ref().map_or(-1, |n| n.height)
}

impl<K, V> AvlNode<K, V> {
    /// The cached height of the subtree rooted at this node.
    pub fn height(&self) -> isize {
        self.height
    }

    /// `height(left) - height(right)`. Positive when the left side is taller.
    ///
    /// See [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        height_of(&self.left) - height_of(&self.right)
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn update_height(&mut self) {
        self.height = height_of(&self.left).max(height_of(&self.right)) + 1;
    }

    /// Rotate self to the left. The entry of the right child moves up into this node and this
    /// node's old entry moves down into a new left child. Used to rebalance when the right child
    /// is too tall, so it must only be called when there _is_ a right child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///     self = a                  self = b
    ///     /     \                   /     \
    ///    x       b     rotate ->   a'      z
    ///           / \               / \
    ///          y   z             x   y
    /// ```
    ///
    /// `self` keeps its position: only the entry it carries and its children change. `a'` is the
    /// right child's old allocation, now carrying `a`.
    pub(crate) fn rotate_left(&mut self) {
        let mut pivot = self.right.take().expect("Rotate left => right child");
        tracing::trace!(direction = "left", "rotating");

        mem::swap(&mut self.key, &mut pivot.key);
        mem::swap(&mut self.value, &mut pivot.value);

        self.right = pivot.right.take();
        pivot.right = pivot.left.take();
        pivot.left = self.left.take();
        pivot.update_height();

        self.left = Some(pivot);
        self.update_height();
    }

    /// The mirror image of [`AvlNode::rotate_left`].
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        self = a              self = b
    ///        /     \               /     \
    ///       b       z  rotate ->  x       a'
    ///      / \                           / \
    ///     x   y                         y   z
    /// ```
    pub(crate) fn rotate_right(&mut self) {
        let mut pivot = self.left.take().expect("Rotate right => left child");
        tracing::trace!(direction = "right", "rotating");

        mem::swap(&mut self.key, &mut pivot.key);
        mem::swap(&mut self.value, &mut pivot.value);

        self.left = pivot.left.take();
        pivot.left = pivot.right.take();
        pivot.right = self.right.take();
        pivot.update_height();

        self.right = Some(pivot);
        self.update_height();
    }

    /// Restores the AVL invariant at an imbalanced node whose children are balanced.
    ///
    /// The taller side is rotated up. If the taller child leans the other way (the "zig-zag"
    /// shapes LR and RL) it is straightened first with a rotation in the opposite direction.
    /// When both sides are equally tall the right side is treated as the taller one.
    pub(crate) fn rebalance(&mut self) {
        if height_of(&self.left) > height_of(&self.right) {
            let left = self.left.as_mut().expect("Left heavy => left child");
            if height_of(&left.left) < height_of(&left.right) {
                left.rotate_left();
            }
            self.rotate_right();
        } else {
            let right = self.right.as_mut().expect("Right heavy => right child");
            if height_of(&right.left) > height_of(&right.right) {
                right.rotate_right();
            }
            self.rotate_left();
        }

        if cfg!(debug_assertions) {
            let left_height = height_of(&self.left);
            let right_height = height_of(&self.right);
            assert_eq!(self.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }
}

impl<K, V> TreeNode for AvlNode<K, V> {
    type Key = K;
    type Value = V;

    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    fn child_slot(&mut self, direction: Direction) -> &mut Option<Box<Self>> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (
            mem::replace(&mut self.key, key),
            mem::replace(&mut self.value, value),
        )
    }

    fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }

    fn refresh(&mut self) {
        self.update_height();
    }
}
