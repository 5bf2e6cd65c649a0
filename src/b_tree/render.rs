use std::fmt::{self, Debug, Display, Write};

use super::BTree;
use super::node::Node;

impl<K: Debug> BTree<K> {
    /// Renders the tree one node per line, pre-order, indented two spaces per level.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<K: Debug> Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.render(0, f)
    }
}

impl<K: Debug> Node<K> {
    fn render<W: Write>(&self, level: usize, out: &mut W) -> fmt::Result {
        writeln!(out, "{}Node {:?}", "  ".repeat(level), self.keys())?;
        for child in self.children() {
            child.render(level + 1, out)?;
        }
        Ok(())
    }
}
