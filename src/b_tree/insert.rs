use std::cmp::Ordering;
use std::mem;

use tracing::{debug, trace};

use super::BTree;
use super::node::Node;

impl<K: Ord> BTree<K> {
    /// Inserts `key` into the tree.
    ///
    /// Returns `false` and leaves the key set unchanged when `key` is already
    /// present. Full nodes met on the way down are split either way.
    pub fn insert(&mut self, key: K) -> bool {
        if self.root.len() == self.max_keys() {
            // The root is the only node whose split grows the tree
            let old_root = mem::replace(&mut self.root, Node::empty_leaf());
            // Make a fresh internal root that owns the old root, then split the old root under it
            let mut new_root = Node::Internal { keys: Vec::new(), children: vec![old_root] };
            new_root.split_child(0, self.degree);
            self.root = new_root;
            debug!(height = self.height(), "root split");
        }

        let inserted = self.root.insert_non_full(key, self.degree);
        if inserted {
            self.len += 1;
        }
        inserted
    }
}

impl<K: Ord> Node<K> {
    /// Inserts a key into the subtree rooted at this node.
    ///
    /// The node must not be full when this is called.
    fn insert_non_full(&mut self, key: K, degree: usize) -> bool {
        let (found, mut idx) = self.search(&key);
        if found {
            return false;
        }

        if let Node::Leaf { keys } = self {
            keys.insert(idx, key);
            return true;
        }

        if self.child(idx).is_full(degree) {
            self.split_child(idx, degree);
            // The promoted median now sits at idx, pick the half that takes the key
            match key.cmp(&self.keys()[idx]) {
                Ordering::Equal => return false,
                Ordering::Greater => idx += 1,
                Ordering::Less => {}
            }
        }
        self.child_mut(idx).insert_non_full(key, degree)
    }
}

impl<K> Node<K> {
    /// Splits the full child at `idx` into two nodes of `t - 1` keys each and
    /// moves its median up into this node at `idx`.
    ///
    /// Takes an `idx` that represents the full child's index and the tree's
    /// minimum `degree`, which fixes where the median sits (`t - 1`).
    pub(crate) fn split_child(&mut self, idx: usize, degree: usize) {
        let (keys, children) = self.internal_parts();
        let child = &mut children[idx];
        assert!(child.is_full(degree), "split of a node that is not full");

        let (median, sibling) = match child {
            Node::Leaf { keys: lower } => {
                // Upper t - 1 keys go to the new sibling, the median is left on top of the lower half
                let upper = lower.split_off(degree);
                let median = lower.pop().expect("full node missing median");
                (median, Node::Leaf { keys: upper })
            }
            Node::Internal { keys: lower, children: lower_children } => {
                let upper = lower.split_off(degree);
                let median = lower.pop().expect("full node missing median");
                // Upper t children follow the upper keys
                let upper_children = lower_children.split_off(degree);
                (median, Node::Internal { keys: upper, children: upper_children })
            }
        };
        trace!(idx, degree, "split child");

        // Move the median up and hang the new sibling right after the old child
        keys.insert(idx, median);
        children.insert(idx + 1, sibling);
    }
}
