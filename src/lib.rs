//! An ordered key-value index built on Binary Search Trees (BSTs), with an AVL flavour that keeps
//! itself balanced.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! a key, the value associated with it and will sometimes have child `Node`s.
//! The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## AVL tree
//!
//! A plain [`Bst`] fed keys in ascending order degenerates into a linked list. An [`Avl`] tree
//! caches the height of every subtree and, after every insert and delete, rotates nodes until the
//! two subtrees of every node differ in height by at most one. That limits the height to
//! `O(lg N)` where `N` is the number of nodes in the tree.
//!
//! ```
//! use avl_index::{Avl, Bst};
//!
//! let mut bst = Bst::new();
//! let mut avl = Avl::new();
//! for key in 0..100 {
//!     bst.insert(key, ());
//!     avl.insert(key, ());
//! }
//!
//! assert_eq!(bst.height(), 99);
//! assert_eq!(avl.height(), 6);
//! assert_eq!(bst.inorder_traversal(), avl.inorder_traversal());
//! ```
//!
//! Neither tree does any locking. Share one between threads behind a lock of your own.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod avl;
mod error;
mod iter;
mod node;
mod render;
mod tree;

#[cfg(test)]
mod test;

pub use avl::Avl;
pub use error::{Result, TreeError};
pub use iter::Iter;
pub use node::{AvlNode, Direction, Node, TreeNode};
pub use tree::{Bst, Tree};
