#![allow(dead_code)]

use std::fmt::Debug;

use b_tree::{BTree, Node};
use tracing_subscriber::EnvFilter;

/// Routes the tree's tracing events to the test output, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn leaf(keys: &[i32]) -> Node<i32> {
    Node::Leaf { keys: keys.to_vec() }
}

/// Walks the whole tree and panics on the first broken structural invariant.
pub fn check_invariants<K: Ord + Debug>(btree: &BTree<K>) {
    let root = btree.root();
    if !root.is_leaf() {
        assert!(!root.is_empty(), "internal root without keys");
    }

    let mut leaf_depth = None;
    let count = check_node(root, btree.degree(), true, None, None, 0, &mut leaf_depth);
    assert_eq!(count, btree.len(), "len out of sync with stored keys");
    assert_eq!(leaf_depth, Some(btree.height()), "height disagrees with leaf depth");
}

fn check_node<K: Ord + Debug>(
    node: &Node<K>,
    degree: usize,
    is_root: bool,
    lower: Option<&K>,
    upper: Option<&K>,
    depth: usize,
    leaf_depth: &mut Option<usize>,
) -> usize {
    let keys = node.keys();
    assert!(keys.len() <= 2 * degree - 1, "overfull node {keys:?}");
    if !is_root {
        assert!(keys.len() >= degree - 1, "underfull node {keys:?}");
    }
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys out of order {keys:?}");
    if let (Some(lower), Some(first)) = (lower, keys.first()) {
        assert!(first > lower, "key {first:?} not above separator {lower:?}");
    }
    if let (Some(upper), Some(last)) = (upper, keys.last()) {
        assert!(last < upper, "key {last:?} not below separator {upper:?}");
    }

    match node {
        Node::Leaf { .. } => {
            assert!(node.children().is_empty());
            match *leaf_depth {
                Some(expected) => assert_eq!(depth, expected, "leaves at different depths"),
                None => *leaf_depth = Some(depth),
            }
            keys.len()
        }
        Node::Internal { children, .. } => {
            assert_eq!(children.len(), keys.len() + 1, "child count mismatch at {keys:?}");
            let mut count = keys.len();
            for (i, child) in children.iter().enumerate() {
                let lower = if i == 0 { lower } else { keys.get(i - 1) };
                let upper = if i == keys.len() { upper } else { keys.get(i) };
                count += check_node(child, degree, false, lower, upper, depth + 1, leaf_depth);
            }
            count
        }
    }
}

pub fn node_count<K>(node: &Node<K>) -> usize {
    1 + node.children().iter().map(node_count).sum::<usize>()
}

/// Everything an observer can tell about the tree's shape: keys, height and node count.
pub fn snapshot<K: Clone>(btree: &BTree<K>) -> (Vec<K>, usize, usize) {
    let keys = btree.traverse().into_iter().cloned().collect();
    (keys, btree.height(), node_count(btree.root()))
}
