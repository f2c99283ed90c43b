//! This crate exposes an unbalanced Binary Search Tree (BST) with the usual
//! queries for inspecting its contents and its shape.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have a left and a right child `Node`. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the longest path
//! from the root `Node` down to a leaf `Node`. This tree does not rebalance
//! itself, so inserting sorted values degrades it into a chain.
//! [`BinarySearchTree::is_balanced`] reports whether that has happened.
//! BSTs naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree ([`BinarySearchTree::in_order`]).
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<_> = [8, 6, 10, 1, 7].into_iter().collect();
//!
//! assert_eq!(tree.minimum().map(|n| *n.value()), Ok(1));
//! assert_eq!(tree.maximum().map(|n| *n.value()), Ok(10));
//! assert_eq!(tree.depth(), 2);
//!
//! assert!(tree.delete(&6));
//! assert_eq!(tree.in_order(), vec![&1, &7, &8, &10]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod node;
pub mod tree;

pub use error::TreeError;
pub use node::Node;
pub use tree::BinarySearchTree;
