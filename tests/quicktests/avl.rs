use avl_index::{Avl, AvlNode, TreeError, TreeNode};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashMap};

use crate::Op;

/// Recomputes the height of every subtree from scratch and checks it against the cached height
/// and the balance invariant. Returns `None` on the first violation.
fn checked_height<K: Ord, V>(node: Option<&AvlNode<K, V>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = checked_height(node.left())?;
    let right = checked_height(node.right())?;

    let ordered = node.left().map_or(true, |l| l.key() < node.key())
        && node.right().map_or(true, |r| r.key() > node.key());
    let height = left.max(right) + 1;
    (ordered && node.height() == height && left.abs_diff(right) <= 1).then_some(height)
}

fn is_avl<K: Ord, V>(tree: &Avl<K, V>) -> bool {
    checked_height(tree.root()) == Some(tree.height())
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Avl::new();
    let mut map = HashMap::new();

    for op in &ops {
        match op {
            Op::Insert(k, v) => {
                tree.insert(*k, *v);
                map.insert(*k, *v);
            }
            Op::Delete(k) => {
                if tree.delete(k).ok() != map.remove(k) {
                    return false;
                }
            }
        }
        if !is_avl(&tree) {
            return false;
        }
    }

    tree.len() == map.len() && map.keys().all(|key| tree.find(key) == map.get(key))
}

#[quickcheck]
fn inorder_is_strictly_increasing(xs: Vec<i16>) -> bool {
    let mut tree = Avl::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let expected: Vec<i16> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    tree.inorder_traversal() == expected
}

#[quickcheck]
fn insert_then_delete_in_another_order(xs: Vec<i16>, rotate_by: usize) -> bool {
    let keys: Vec<i16> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    let mut tree = Avl::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    // Deleting in ascending order starting somewhere in the middle.
    let mut deletes = keys.clone();
    if !deletes.is_empty() {
        let mid = rotate_by % deletes.len();
        deletes.rotate_left(mid);
    }
    for key in &deletes {
        if tree.delete(key) != Ok(*key) || !is_avl(&tree) {
            return false;
        }
    }

    tree.root().is_none() && tree.is_empty() && tree.delete(&0) == Err(TreeError::NoItem)
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i16>) -> bool {
    let mut tree = Avl::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    // An AVL tree with n nodes is never taller than 1.45 * log2(n + 2).
    let bound = 1.45 * ((tree.len() + 2) as f64).log2();
    (tree.height() as f64) <= bound
}
