use std::mem;

use tracing::{debug, trace};

use super::BTree;
use super::node::Node;

impl<K: Ord + Clone> BTree<K> {
    /// Removes `key` from the tree, returning whether it was present.
    ///
    /// Deleting an absent key leaves the tree untouched.
    pub fn delete(&mut self, key: &K) -> bool {
        // The descent below tops up nodes before it knows whether the key exists
        if !self.contains(key) {
            return false;
        }
        let removed = self.root.delete(key, self.degree);

        // Shrink the tree if the root is empty but still has a child
        if self.root.is_empty() && !self.root.is_leaf() {
            let old_root = mem::replace(&mut self.root, Node::empty_leaf());
            self.root = old_root.into_only_child();
            debug!(height = self.height(), "root collapsed");
        }

        if removed {
            self.len -= 1;
        }
        removed
    }
}

impl<K: Ord + Clone> Node<K> {
    /// Deletes a key from the subtree rooted at this node.
    ///
    /// Unless this node is the root, it must hold at least `t` keys so one
    /// can be removed without dropping below the minimum.
    fn delete(&mut self, key: &K, degree: usize) -> bool {
        let (found, idx) = self.search(key);

        if found {
            if self.is_leaf() {
                // Case 1: the key is in a leaf
                self.keys_mut().remove(idx);
            } else {
                // Case 2: the key is in an internal node
                self.delete_internal(key, idx, degree);
            }
            return true;
        }

        if self.is_leaf() {
            // Case 4: reached a leaf without finding the key
            return false;
        }

        // Case 3: the key belongs below children[idx], which must be able to lose a key
        let idx = if self.child(idx).len() < degree { self.fill_child(idx, degree) } else { idx };
        self.child_mut(idx).delete(key, degree)
    }

    /// Removes `keys[idx]` (equal to `key`) from this internal node.
    fn delete_internal(&mut self, key: &K, idx: usize, degree: usize) {
        if self.child(idx).len() >= degree {
            // Case 2a: replace with the predecessor and delete it from the left subtree
            let pred = self.child(idx).rightmost().clone();
            let removed = self.child_mut(idx).delete(&pred, degree);
            debug_assert!(removed, "predecessor missing from its subtree");
            self.keys_mut()[idx] = pred;
        } else if self.child(idx + 1).len() >= degree {
            // Case 2b: replace with the successor and delete it from the right subtree
            let succ = self.child(idx + 1).leftmost().clone();
            let removed = self.child_mut(idx + 1).delete(&succ, degree);
            debug_assert!(removed, "successor missing from its subtree");
            self.keys_mut()[idx] = succ;
        } else {
            // Case 2c: both neighbours are minimal, pull the key down between them
            self.merge(idx);
            let removed = self.child_mut(idx).delete(key, degree);
            debug_assert!(removed, "key lost while merging");
        }
    }
}

impl<K> Node<K> {
    /// Brings `children[idx]` up to at least `t` keys.
    ///
    /// Returns the index of the child to descend into, which moves one to the
    /// left when the last child is merged into its left sibling.
    fn fill_child(&mut self, idx: usize, degree: usize) -> usize {
        let children = self.children();
        if idx > 0 && children[idx - 1].len() >= degree {
            self.borrow_from_prev(idx);
            idx
        } else if idx + 1 < children.len() && children[idx + 1].len() >= degree {
            self.borrow_from_next(idx);
            idx
        } else if idx + 1 < children.len() {
            self.merge(idx);
            idx
        } else {
            self.merge(idx - 1);
            idx - 1
        }
    }

    /// Rotates right: the separator `keys[idx - 1]` moves down to the front of
    /// `children[idx]` and the left sibling's last key takes its place.
    ///
    /// Takes an `idx` that represents the deficient (right) child's index.
    fn borrow_from_prev(&mut self, idx: usize) {
        let (keys, children) = self.internal_parts();
        // Split the children so the sibling and the child can be borrowed together
        let (left, right) = children.split_at_mut(idx);
        let sibling = &mut left[idx - 1];
        let child = &mut right[0];

        // Sibling's last key goes up, the old separator comes down as the child's first key
        let last_key = sibling.keys_mut().pop().expect("left sibling has no keys");
        let separator = mem::replace(&mut keys[idx - 1], last_key);
        child.keys_mut().insert(0, separator);

        // Sibling's last child becomes the child's first child
        match (sibling, child) {
            (Node::Internal { children: from, .. }, Node::Internal { children: to, .. }) => {
                let last_child = from.pop().expect("left sibling has no children");
                to.insert(0, last_child);
            }
            (Node::Leaf { .. }, Node::Leaf { .. }) => {}
            _ => unreachable!("siblings at different depths"),
        }
        trace!(idx, "borrowed from previous sibling");
    }

    /// Rotates left: the separator `keys[idx]` moves down to the back of
    /// `children[idx]` and the right sibling's first key takes its place.
    ///
    /// Takes an `idx` that represents the deficient (left) child's index.
    fn borrow_from_next(&mut self, idx: usize) {
        let (keys, children) = self.internal_parts();
        let (left, right) = children.split_at_mut(idx + 1);
        let child = &mut left[idx];
        let sibling = &mut right[0];

        // Sibling's first key goes up, the old separator comes down as the child's last key
        let first_key = sibling.keys_mut().remove(0);
        let separator = mem::replace(&mut keys[idx], first_key);
        child.keys_mut().push(separator);

        // Sibling's first child becomes the child's last child
        match (sibling, child) {
            (Node::Internal { children: from, .. }, Node::Internal { children: to, .. }) => {
                to.push(from.remove(0));
            }
            (Node::Leaf { .. }, Node::Leaf { .. }) => {}
            _ => unreachable!("siblings at different depths"),
        }
        trace!(idx, "borrowed from next sibling");
    }

    /// Merges `children[idx + 1]` and the separator `keys[idx]` into
    /// `children[idx]`. The right sibling is dropped.
    ///
    /// Takes an `idx` that represents the left child's index.
    fn merge(&mut self, idx: usize) {
        let (keys, children) = self.internal_parts();
        assert!(idx + 1 < children.len(), "merge past the last child");

        // Remove the separator and take ownership of the right child
        let separator = keys.remove(idx);
        let right = children.remove(idx + 1);
        let left = &mut children[idx];

        // Separator comes down, then the right child's keys and children are appended

        match (left, right) {
            (Node::Leaf { keys: left_keys }, Node::Leaf { keys: right_keys }) => {
                left_keys.push(separator);
                left_keys.extend(right_keys);
            }
            (
                Node::Internal { keys: left_keys, children: left_children },
                Node::Internal { keys: right_keys, children: right_children },
            ) => {
                left_keys.push(separator);
                left_keys.extend(right_keys);
                left_children.extend(right_children);
            }
            _ => unreachable!("siblings at different depths"),
        }
        // The right child is dropped here
        trace!(idx, merged_len = children[idx].len(), "merged children");
    }
}
