//! An in-memory B-tree of configurable minimum degree.
//!
//! Insertion splits full nodes on the way down and deletion tops up minimal
//! nodes on the way down, so every operation is a single root-to-leaf pass.

pub mod b_tree;
pub mod error;

pub use b_tree::{BTree, DEFAULT_DEGREE, MAX_DEGREE, MIN_DEGREE, node::Node};
pub use error::BTreeError;
