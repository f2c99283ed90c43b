//! An unbalanced Binary Search Tree that owns its nodes through `Box`ed child links.
//!
//! Values that compare equal to an existing value are stored in that value's left subtree, so
//! the same value can be inserted more than once. Deleting a node with two children promotes its
//! in-order predecessor (the largest value of its left subtree).
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::{BinarySearchTree, TreeError};
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//! assert_eq!(tree.maximum(), Err(TreeError::EmptyTree));
//!
//! for value in [4, 2, 5, 1, 3, 6] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6]);
//! assert!(tree.is_balanced());
//!
//! // Deleting reports whether the value was there.
//! assert!(tree.delete(&2));
//! assert!(!tree.delete(&2));
//! assert_eq!(tree.root().and_then(|root| root.left()).map(|n| *n.value()), Some(1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;
use crate::node::{Link, Node};

/// A Binary Search Tree. This can be used for inserting, finding, and deleting values and for
/// inspecting the shape of the tree. The tree never rebalances itself: its shape only depends on
/// the order of inserts and deletes.
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Dropping the root directly would recurse once per level, which overflows the stack for
    // long degenerate trees.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generate a `BinarySearchTree` whose root holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::with_value(5);
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(5));
    /// ```
    pub fn with_value(value: T) -> Self {
        Self {
            root: Some(Node::new_boxed(value)),
            len: 1,
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored. Duplicates are counted once per insert.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree. A value equal to one already stored goes into that node's
    /// left subtree.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        Self::insert_into(&mut self.root, value);
        self.len += 1;
    }

    fn insert_into(link: &mut Link<T>, value: T)
    where
        T: Ord,
    {
        match link {
            None => *link = Some(Node::new_boxed(value)),
            Some(node) => {
                if value <= node.value {
                    Self::insert_into(&mut node.left, value);
                } else {
                    Self::insert_into(&mut node.right, value);
                }

                if cfg!(debug_assertions) {
                    if let Some(left) = node.left() {
                        assert!(left.value <= node.value);
                    }
                    if let Some(right) = node.right() {
                        assert!(right.value > node.value);
                    }
                }
            }
        }
    }

    /// Potentially finds the node holding `value`. If no node has the value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [8, 6, 10].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&6).map(|n| *n.value()), Some(6));
    /// assert!(tree.find(&7).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.find_from(value, self.root())
    }

    /// Like [`find`](Self::find) but searches only the subtree rooted at `from`.
    pub fn find_from<'a>(&self, value: &T, from: Option<&'a Node<T>>) -> Option<&'a Node<T>>
    where
        T: Ord,
    {
        let node = from?;
        match value.cmp(&node.value) {
            Ordering::Less => self.find_from(value, node.left()),
            Ordering::Equal => Some(node),
            Ordering::Greater => self.find_from(value, node.right()),
        }
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Deletes one node holding `value` and returns `true`. If the tree does not contain the value,
    /// nothing happens and `false` is returned.
    ///
    /// A node with one child is replaced by that child. A node with two children is replaced by
    /// its in-order predecessor, whose own left subtree takes the predecessor's old place.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.delete(&3));
    /// assert_eq!(tree.root().and_then(|n| n.left()).map(|n| *n.value()), Some(1));
    /// assert_eq!(tree.in_order(), vec![&1, &4, &5, &8]);
    ///
    /// assert!(!tree.delete(&42));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let deleted = Self::delete_from(&mut self.root, value);
        if deleted {
            self.len -= 1;
        } else {
            log::trace!("Value to delete not found, tree left unchanged");
        }
        deleted
    }

    fn delete_from(link: &mut Link<T>, value: &T) -> bool
    where
        T: Ord,
    {
        let Some(node) = link.as_deref_mut() else {
            return false;
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::delete_from(&mut node.left, value),
            Ordering::Greater => Self::delete_from(&mut node.right, value),
            Ordering::Equal => {
                let deleted = link.take().expect("Matched node implies link");
                *link = Self::replace(deleted);
                true
            }
        }
    }

    /// Returns the subtree that takes the place of `deleted`.
    fn replace(mut deleted: Box<Node<T>>) -> Link<T>
    where
        T: Ord,
    {
        match (deleted.left.take(), deleted.right.take()) {
            (None, None) => {
                log::trace!("Deleting leaf node");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                log::trace!("Deleting node with one child, promoting the child");
                Some(child)
            }
            (Some(mut left), Some(right)) => {
                // The predecessor is the largest node of the left subtree. If the left child has
                // no right child it is the predecessor and keeps its own left subtree.
                let mut replacement = match Self::take_rightmost(&mut left) {
                    Some(mut predecessor) => {
                        log::trace!("Deleting node with two children, splicing out predecessor");
                        predecessor.left = Some(left);
                        predecessor
                    }
                    None => {
                        log::trace!("Deleting node with two children, promoting left child");
                        left
                    }
                };
                replacement.right = Some(right);

                if cfg!(debug_assertions) {
                    if let Some(left) = replacement.left() {
                        assert!(left.value <= replacement.value);
                    }
                    if let Some(right) = replacement.right() {
                        assert!(right.value > replacement.value);
                    }
                }
                Some(replacement)
            }
        }
    }

    /// Unlinks the rightmost node strictly below `parent` and fills the gap it leaves with its
    /// left subtree. Returns `None` when `parent` has no right child.
    fn take_rightmost(parent: &mut Node<T>) -> Link<T> {
        let right = parent.right.as_deref_mut()?;
        if right.right.is_some() {
            return Self::take_rightmost(right);
        }

        let mut rightmost = parent.right.take()?;
        parent.right = rightmost.left.take();
        Some(rightmost)
    }

    /// The node holding the smallest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree has no nodes.
    pub fn minimum(&self) -> Result<&Node<T>, TreeError> {
        match self.root() {
            Some(root) => Ok(self.minimum_from(root)),
            None => {
                log::debug!("Minimum requested from an empty tree");
                Err(TreeError::EmptyTree)
            }
        }
    }

    /// The node holding the smallest value in the subtree rooted at `from`.
    pub fn minimum_from<'a>(&self, from: &'a Node<T>) -> &'a Node<T> {
        let mut node = from;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node holding the largest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree has no nodes.
    pub fn maximum(&self) -> Result<&Node<T>, TreeError> {
        match self.root() {
            Some(root) => Ok(self.maximum_from(root)),
            None => {
                log::debug!("Maximum requested from an empty tree");
                Err(TreeError::EmptyTree)
            }
        }
    }

    /// The node holding the largest value in the subtree rooted at `from`.
    pub fn maximum_from<'a>(&self, from: &'a Node<T>) -> &'a Node<T> {
        let mut node = from;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// The number of edges on the longest path from the root down to a leaf. Both an empty tree
    /// and a single node have a depth of 0.
    pub fn depth(&self) -> usize {
        self.depth_from(self.root())
    }

    /// Like [`depth`](Self::depth) but for the subtree rooted at `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [8, 6, 10, 13, 14].into_iter().collect();
    ///
    /// assert_eq!(tree.depth(), 3);
    /// assert_eq!(tree.depth_from(tree.root().and_then(|n| n.right())), 2);
    /// assert_eq!(tree.depth_from(None), 0);
    /// ```
    pub fn depth_from(&self, from: Option<&Node<T>>) -> usize {
        let Some(node) = from else {
            return 0;
        };
        // Only children that exist add an edge.
        [node.left(), node.right()]
            .into_iter()
            .flatten()
            .map(|child| 1 + self.depth_from(Some(child)))
            .max()
            .unwrap_or(0)
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one. This only
    /// inspects the tree, it never rebalances it.
    pub fn is_balanced(&self) -> bool {
        self.is_balanced_from(self.root())
    }

    /// Like [`is_balanced`](Self::is_balanced) but for the subtree rooted at `from`.
    pub fn is_balanced_from(&self, from: Option<&Node<T>>) -> bool {
        Self::balanced_height(from).is_some()
    }

    /// The height of the subtree if it is balanced. The first unbalanced subtree short circuits
    /// the walk with `None`.
    fn balanced_height(from: Option<&Node<T>>) -> Option<usize> {
        let Some(node) = from else {
            return Some(0);
        };
        let left = Self::balanced_height(node.left())?;
        let right = Self::balanced_height(node.right())?;

        (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
    }

    /// All values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.in_order_from(self.root())
    }

    /// Like [`in_order`](Self::in_order) but for the subtree rooted at `from`.
    pub fn in_order_from<'a>(&self, from: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut values = Vec::new();
        Self::collect_in_order(from, &mut values);
        values
    }

    fn collect_in_order<'a>(from: Option<&'a Node<T>>, values: &mut Vec<&'a T>) {
        if let Some(node) = from {
            Self::collect_in_order(node.left(), values);
            values.push(&node.value);
            Self::collect_in_order(node.right(), values);
        }
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
