use std::collections::BTreeSet;

use avl_tree::avl_base::{
    avl::AvlTree,
    avl_traits::{KeyComparator, _AvlTree},
    error::AvlError,
    node::Node,
    DefaultAvlTree, VerifiedAvlTree,
};
use rand::{seq::SliceRandom, thread_rng, Rng};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Recompute every height from scratch and check it against the cache and
/// the balance bound. Returns the structural height.
fn check_structure<K>(node: Option<&Node<K>>) -> i32 {
    match node {
        None => -1,
        Some(n) => {
            let lh = check_structure(n.left());
            let rh = check_structure(n.right());
            assert!((lh - rh).abs() <= 1, "unbalanced node");
            assert_eq!(n.height(), 1 + lh.max(rh), "stale cached height");
            1 + lh.max(rh)
        }
    }
}

fn keys_of(node: Option<&Node<i32>>, out: &mut Vec<i32>) {
    if let Some(n) = node {
        keys_of(n.left(), out);
        out.push(*n.key());
        keys_of(n.right(), out);
    }
}

fn build(keys: &[i32]) -> DefaultAvlTree<i32> {
    let mut tree = DefaultAvlTree::new();
    for &key in keys {
        tree.insert(key).unwrap();
    }
    tree
}

fn permutations(items: &[i32]) -> Vec<Vec<i32>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn ascending_three_rotates_left_once() {
    init();
    let tree = build(&[1, 2, 3]);

    let stats = tree.get_stats();
    assert_eq!(stats.left_rotations, 1);
    assert_eq!(stats.right_rotations, 0);
    assert_eq!(stats.double_rotations, 0);

    let root = tree.root().unwrap();
    assert_eq!((*root.key(), root.height()), (2, 1));
    let left = root.left().unwrap();
    let right = root.right().unwrap();
    assert_eq!((*left.key(), left.height()), (1, 0));
    assert_eq!((*right.key(), right.height()), (3, 0));
    assert!(left.is_leaf() && right.is_leaf());
}

#[test]
fn zig_zag_takes_a_double_rotation() {
    init();
    let tree = build(&[3, 1, 2]);

    let stats = tree.get_stats();
    assert_eq!(stats.double_rotations, 1);
    assert_eq!(stats.left_rotations, 1);
    assert_eq!(stats.right_rotations, 1);
    assert_eq!(stats.rotations(), 2);
    assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    check_structure(tree.root());
}

#[test]
fn ascending_run_builds_perfect_tree() {
    init();
    let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        tree.level_order().copied().collect::<Vec<_>>(),
        vec![4, 2, 6, 1, 3, 5, 7]
    );
    assert_eq!(tree.to_string(), "4  2  6  1  3  5  7");
    assert_eq!(tree.get_stats().left_rotations, 4);
    assert_eq!(tree.get_stats().right_rotations, 0);

    let mut tree = DefaultAvlTree::<i32>::new();
    for key in 0..1023 {
        tree.insert(key).unwrap();
    }
    assert_eq!(tree.height(), 9);
    tree.verify();
}

#[test]
fn remove_two_children_promotes_successor() {
    init();
    let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(tree.get_stats().rotations(), 0);

    tree.remove(&5).unwrap();
    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 7);

    let mut right = Vec::new();
    keys_of(root.right(), &mut right);
    assert_eq!(right, vec![8, 9]);
    assert!(!tree.contains(&5));
    assert_eq!(tree.len(), 6);
    check_structure(tree.root());
    tree.verify();
}

#[test]
fn remove_missing_key_leaves_tree_untouched() {
    init();
    let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);
    let snapshot = tree.clone();

    assert_eq!(tree.remove(&100), Err(AvlError::KeyNotFound));
    assert_eq!(tree, snapshot);
    assert_eq!(tree.len(), 7);
}

#[test]
fn duplicate_insert_leaves_tree_untouched() {
    init();
    let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);
    let snapshot = tree.clone();

    for key in [5, 1, 9] {
        assert_eq!(tree.insert(key), Err(AvlError::DuplicateKey));
    }
    assert_eq!(tree, snapshot);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.get_stats(), snapshot.get_stats());
}

#[test]
fn contains_does_not_mutate() {
    init();
    let tree = build(&[5, 3, 8, 1, 4, 7, 9]);
    let snapshot = tree.clone();

    for key in 0..12 {
        assert_eq!(tree.contains(&key), [1, 3, 4, 5, 7, 8, 9].contains(&key));
    }
    assert_eq!(tree, snapshot);
}

#[test]
fn every_insert_order_round_trips() {
    init();
    let keys = [5, 3, 8, 1, 4, 7, 9];
    let mut rng = thread_rng();

    for order in permutations(&keys) {
        let mut tree = build(&order);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 7, 8, 9]);
        check_structure(tree.root());

        let mut removals = order.clone();
        removals.shuffle(&mut rng);
        for key in removals {
            tree.remove(&key).unwrap();
            assert!(!tree.contains(&key));
            check_structure(tree.root());
            tree.verify();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
    }
}

#[test]
fn errors_display() {
    assert_eq!(
        AvlError::DuplicateKey.to_string(),
        "key already exists in the tree"
    );
    assert_eq!(AvlError::KeyNotFound.to_string(), "key not found in the tree");
}

#[derive(Clone, Debug)]
struct Descending;

impl KeyComparator<i32> for Descending {
    fn new() -> Self {
        Descending
    }
    fn less(&self, lhs: &i32, rhs: &i32) -> bool {
        lhs > rhs
    }
}

#[test]
fn custom_comparator_orders_keys() {
    init();
    let mut tree = AvlTree::<_AvlTree<i32, Descending, true>>::new();
    for key in 0..50 {
        tree.insert(key).unwrap();
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (0..50).rev().collect::<Vec<_>>());
    assert_eq!(tree.min(), Some(&49));
    assert_eq!(tree.max(), Some(&0));
    assert_eq!(tree.insert(7), Err(AvlError::DuplicateKey));
    tree.remove(&7).unwrap();
    assert!(!tree.contains(&7));
}

#[test]
fn random_op_test() {
    init();
    let mut tree = VerifiedAvlTree::<i32>::new();
    let mut model = BTreeSet::new();
    let mut rng = thread_rng();

    for _ in 0..5000 {
        let key = rng.gen_range(0..500);
        if rng.gen_bool(0.6) {
            let expected = if model.insert(key) {
                Ok(())
            } else {
                Err(AvlError::DuplicateKey)
            };
            assert_eq!(tree.insert(key), expected);
        } else {
            let expected = if model.remove(&key) {
                Ok(())
            } else {
                Err(AvlError::KeyNotFound)
            };
            assert_eq!(tree.remove(&key), expected);
        }
        assert_eq!(tree.len(), model.len());
    }

    assert!(tree.iter().eq(model.iter()));
    let bound = 1.45 * ((tree.len() + 2) as f64).log2();
    assert!((tree.height() as f64) <= bound);
}

#[test]
fn large_shuffled_load() {
    init();
    let n = 50000;
    let mut rng = thread_rng();
    let mut keys: Vec<i32> = (0..n).collect();
    keys.shuffle(&mut rng);

    let mut tree = DefaultAvlTree::<i32>::new();
    for &key in keys.iter() {
        tree.insert(key).unwrap();
    }
    tree.verify();
    assert_eq!(tree.iter().len(), n as usize);

    keys.shuffle(&mut rng);
    let removed = keys.split_off(n as usize / 2);
    for key in removed.iter() {
        tree.remove(key).unwrap();
    }
    tree.verify();

    for key in removed.iter() {
        assert!(!tree.contains(key));
    }
    for key in keys.iter() {
        assert!(tree.contains(key));
    }
}
