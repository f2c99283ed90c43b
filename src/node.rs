//! The cell a [`BinarySearchTree`](crate::BinarySearchTree) is built from.

/// An owned, possibly absent child of a [`Node`].
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores a value and up to two children. Every node is owned by exactly one parent
/// link (or by the tree, for the root) so there are no back references or cycles.
///
/// Callers only get shared references to nodes. Links are rewritten exclusively by the tree's own
/// operations so the ordering of values is never broken from the outside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new childless `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether at least one child is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 1].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert!(root.has_children());
    /// assert!(!root.left().unwrap().has_children());
    /// ```
    pub fn has_children(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_holds_value() {
        let node = Node::new(10);

        assert_eq!(node.value(), &10);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn has_children() {
        let mut node = Node::new(10);
        assert!(!node.has_children());

        node.left = Some(Node::new_boxed(8));
        assert!(node.has_children());

        node.left = None;
        node.right = Some(Node::new_boxed(12));
        assert!(node.has_children());
        assert_eq!(node.right().map(Node::value), Some(&12));
    }
}
