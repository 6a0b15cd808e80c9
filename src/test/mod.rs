//! Helpers shared by the unit tests of every tree flavour.


use crate::node::{AvlNode, TreeNode};
use crate::tree::Tree;
use crate::Avl;

/// Asserts that every node's key is strictly between the keys of the ancestors it hangs
/// left/right of, and that the cached length matches the number of nodes.
pub(crate) fn assert_bst<N>(tree: &Tree<N>)
where
    N: TreeNode,
    N::Key: Ord + std::fmt::Debug,
{
    let mut count = 0;
    let mut stack: Vec<(&N, Option<&N::Key>, Option<&N::Key>)> =
        tree.root().map(|n| (n, None, None)).into_iter().collect();
    while let Some((node, lower, upper)) = stack.pop() {
        count += 1;
        if let Some(lower) = lower {
            assert!(node.key() > lower, "{:?} is not above {:?}", node.key(), lower);
        }
        if let Some(upper) = upper {
            assert!(node.key() < upper, "{:?} is not below {:?}", node.key(), upper);
        }
        stack.extend(node.left().map(|n| (n, lower, Some(node.key()))));
        stack.extend(node.right().map(|n| (n, Some(node.key()), upper)));
    }
    assert_eq!(count, tree.len());
}

/// Asserts the BST property plus, for every node, that the cached height matches a height
/// recomputed from scratch and that the balance factor is within [-1, 1].
pub(crate) fn assert_avl<K, V>(tree: &Avl<K, V>)
where
    K: Ord + std::fmt::Debug,
{
    assert_bst::<AvlNode<K, V>>(tree);
    let height = checked_height(tree.root());
    assert_eq!(height, tree.height());
}

/// Recomputes the height of a subtree, checking the cached heights and balance of every node in
/// it along the way.
fn checked_height<K, V>(node: Option<&AvlNode<K, V>>) -> isize
where
    K: std::fmt::Debug,
{
    let Some(node) = node else {
        return -1;
    };
    let left = checked_height(node.left());
    let right = checked_height(node.right());

    assert_eq!(node.height(), left.max(right) + 1, "stale height at {:?}", node.key());
    assert!(
        left.abs_diff(right) <= 1,
        "{:?} is out of balance: {} vs {}",
        node.key(),
        left,
        right
    );
    assert_eq!(node.balance_factor(), left - right);
    left.max(right) + 1
}
