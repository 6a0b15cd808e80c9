//! In-order iteration over a [`Tree`][crate::Tree].

use crate::node::TreeNode;

/// Iterator over the entries of a tree in ascending key order. Created by
/// [`Tree::iter`][crate::Tree::iter].
///
/// Keeps the path of not yet visited ancestors on an explicit stack, so iterating a degenerate
/// tree is as safe as iterating a balanced one.
pub struct Iter<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: TreeNode> Iter<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: TreeNode> Iterator for Iter<'a, N> {
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((node.key(), node.value()))
    }
}
