use thiserror::Error;

/// Errors that can occur while building a [`BTree`](crate::BTree).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BTreeError {
    /// A minimum degree below 2 leaves nodes with no keys after a split.
    #[error("minimum degree must be at least {min}, got {degree}", min = crate::MIN_DEGREE)]
    DegreeTooSmall { degree: usize },
    /// A minimum degree whose node capacity `2 * degree - 1` does not fit in a `usize`.
    #[error("minimum degree must be at most {max}, got {degree}", max = crate::MAX_DEGREE)]
    DegreeTooLarge { degree: usize },
}
