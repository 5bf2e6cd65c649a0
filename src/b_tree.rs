// https://en.wikipedia.org/wiki/B-tree
// This follows the CLRS definition with a minimum degree t:
// A non-root node: min t-1 max 2t-1 keys
// The root: min 0 max 2t-1 keys
// An internal node with k keys: exactly k+1 children
// All leaves sit at the same depth

pub mod node;

mod delete;
mod insert;
mod render;

use crate::error::BTreeError;
use node::Node;

/// Smallest minimum degree a tree accepts.
pub const MIN_DEGREE: usize = 2;

/// Largest minimum degree a tree accepts, so that a full node's `2t - 1` keys
/// can still be counted.
pub const MAX_DEGREE: usize = usize::MAX / 2;

/// Minimum degree used by [`BTree::default`].
pub const DEFAULT_DEGREE: usize = 6;

/// A B-tree holding unique, totally ordered keys.
#[derive(Debug, Clone)]
pub struct BTree<K> {
    root: Node<K>,
    degree: usize,
    len: usize,
}

impl<K> BTree<K> {
    /// Creates an empty tree whose non-root nodes hold between `degree - 1`
    /// and `2 * degree - 1` keys.
    ///
    /// Fails with [`BTreeError::DegreeTooSmall`] when `degree < 2` and with
    /// [`BTreeError::DegreeTooLarge`] when `degree > MAX_DEGREE`.
    pub fn new(degree: usize) -> Result<Self, BTreeError> {
        if degree < MIN_DEGREE {
            return Err(BTreeError::DegreeTooSmall { degree });
        }
        if degree > MAX_DEGREE {
            return Err(BTreeError::DegreeTooLarge { degree });
        }
        Ok(BTree { root: Node::empty_leaf(), degree, len: 0 })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of keys stored in the whole tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Number of edges between the root and any leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = &self.root;
        while let Node::Internal { children, .. } = node {
            node = &children[0];
            height += 1;
        }
        height
    }

    /// All keys in increasing order.
    pub fn traverse(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len);
        collect_in_order(&self.root, &mut out);
        out
    }

    fn max_keys(&self) -> usize {
        2 * self.degree - 1
    }
}

fn collect_in_order<'a, K>(node: &'a Node<K>, out: &mut Vec<&'a K>) {
    match node {
        Node::Leaf { keys } => out.extend(keys.iter()),
        Node::Internal { keys, children } => {
            for (key, child) in keys.iter().zip(children) {
                collect_in_order(child, out);
                out.push(key);
            }
            collect_in_order(&children[keys.len()], out);
        }
    }
}

impl<K: Ord> BTree<K> {
    /// Finds the node holding `key` and the key's index within it.
    pub fn search(&self, key: &K) -> Option<(&Node<K>, usize)> {
        let mut node = &self.root;
        loop {
            let (found, idx) = node.search(key);
            if found {
                return Some((node, idx));
            }
            match node {
                Node::Leaf { .. } => return None,
                Node::Internal { children, .. } => node = &children[idx],
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        BTree { root: Node::empty_leaf(), degree: DEFAULT_DEGREE, len: 0 }
    }
}
