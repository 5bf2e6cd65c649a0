/// A node of a [`BTree`](crate::BTree).
///
/// Leaves hold keys only. An internal node with `n` keys owns exactly `n + 1`
/// children, and the subtree at `children[i]` holds the keys strictly between
/// `keys[i - 1]` and `keys[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<K> {
    Leaf { keys: Vec<K> },
    Internal { keys: Vec<K>, children: Vec<Node<K>> },
}

impl<K> Node<K> {
    pub(crate) fn empty_leaf() -> Self {
        Node::Leaf { keys: Vec::new() }
    }

    /// Keys of this node in strictly increasing order.
    pub fn keys(&self) -> &[K] {
        match self {
            Node::Leaf { keys } | Node::Internal { keys, .. } => keys,
        }
    }

    /// Children of this node, empty for a leaf.
    pub fn children(&self) -> &[Node<K>] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Internal { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of keys held by this node (not the subtree).
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// A node is full once it holds `2t - 1` keys.
    pub(crate) fn is_full(&self, degree: usize) -> bool {
        self.len() == 2 * degree - 1
    }

    pub(crate) fn keys_mut(&mut self) -> &mut Vec<K> {
        match self {
            Node::Leaf { keys } | Node::Internal { keys, .. } => keys,
        }
    }

    /// Keys and children of an internal node.
    ///
    /// Panics on a leaf: callers only reach for children after checking the
    /// node is internal.
    pub(crate) fn internal_parts(&mut self) -> (&mut Vec<K>, &mut Vec<Node<K>>) {
        match self {
            Node::Internal { keys, children } => (keys, children),
            Node::Leaf { .. } => panic!("leaf node has no children"),
        }
    }

    pub(crate) fn child(&self, idx: usize) -> &Node<K> {
        &self.children()[idx]
    }

    pub(crate) fn child_mut(&mut self, idx: usize) -> &mut Node<K> {
        &mut self.internal_parts().1[idx]
    }

    /// Rightmost key of the rightmost leaf below this node.
    pub(crate) fn rightmost(&self) -> &K {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { keys } => return keys.last().expect("leaf node missing keys"),
                Node::Internal { children, .. } => {
                    node = children.last().expect("internal node missing children");
                }
            }
        }
    }

    /// Leftmost key of the leftmost leaf below this node.
    pub(crate) fn leftmost(&self) -> &K {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { keys } => return keys.first().expect("leaf node missing keys"),
                Node::Internal { children, .. } => {
                    node = children.first().expect("internal node missing children");
                }
            }
        }
    }

    /// Consumes an internal root left with no keys and returns its only child.
    pub(crate) fn into_only_child(self) -> Node<K> {
        match self {
            Node::Internal { keys, mut children } => {
                assert!(keys.is_empty() && children.len() == 1, "node still has keys");
                children.remove(0)
            }
            Node::Leaf { .. } => panic!("leaf node has no children"),
        }
    }
}

impl<K: Ord> Node<K> {
    /// Looks up `key` among this node's keys.
    ///
    /// Returns `(true, idx)` when `keys[idx] == key`, otherwise `(false, idx)`
    /// where `idx` is the first key greater than `key`, which is also the
    /// child whose subtree may hold it.
    pub(crate) fn search(&self, key: &K) -> (bool, usize) {
        match self.keys().binary_search(key) {
            Ok(idx) => (true, idx),
            Err(idx) => (false, idx),
        }
    }
}
