//! Errors reported by [`BinarySearchTree`](crate::BinarySearchTree).
//!
//! Looking up or deleting a value that isn't stored is not an error: [`find`] returns `None` and
//! [`delete`] returns `false`.
//!
//! [`find`]: crate::BinarySearchTree::find
//! [`delete`]: crate::BinarySearchTree::delete

use thiserror::Error;

/// Tree query error
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TreeError {
    /// The query needs at least one node but the tree has none.
    #[error("The tree is empty.")]
    EmptyTree,
}
