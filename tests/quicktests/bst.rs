use avl_index::{Bst, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Bst<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Delete(k) => {
                let expected = map.remove(k).ok_or(TreeError::NoItem);
                assert_eq!(bst.delete(k), expected);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Bst::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len() && map.keys().all(|key| tree.find(key) == map.get(key))
}

#[quickcheck]
fn inorder_is_strictly_increasing(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Bst::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.inorder_traversal().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Bst::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn failed_delete_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = Bst::new();
    for x in xs.iter().filter(|x| **x != missing) {
        tree.insert(*x, ());
    }
    let preorder = tree.preorder_traversal();
    let postorder = tree.postorder_traversal();

    tree.delete(&missing) == Err(TreeError::NoItem)
        && tree.preorder_traversal() == preorder
        && tree.postorder_traversal() == postorder
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Bst::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn create_balanced_has_minimal_height(len: u8) -> bool {
    let keys: Vec<u16> = (0..u16::from(len)).collect();
    let tree: Bst<u16, ()> = Bst::create_balanced(keys.clone());

    // floor(log2(len)) for a non-empty tree, -1 for an empty one.
    let minimal = if len == 0 { -1 } else { 7 - len.leading_zeros() as isize };
    tree.inorder_traversal() == keys && tree.height() == minimal
}
