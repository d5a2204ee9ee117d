use std::fmt::{self, Display, Formatter};

/// A handle to a node stored in a [`BinaryTree`](super::BinaryTree). Identity is the handle
/// itself, never the value stored at it, so trees holding duplicate values are still traversed
/// correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the position of the node within its tree's storage. Nodes are numbered in the
    /// order they were created.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An optional child link.
pub type Branch = Option<NodeId>;

/// A single node of a [`BinaryTree`](super::BinaryTree): a value and links to up to two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) left: Branch,
    pub(crate) right: Branch,
    /// Set once the node has been joined under a parent, so that it can't gain a second one.
    pub(crate) attached: bool,
}

impl<T> TreeNode<T> {
    pub(crate) const fn new(value: T, left: Branch, right: Branch) -> TreeNode<T> {
        TreeNode {
            value,
            left,
            right,
            attached: false,
        }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn left(&self) -> Branch {
        self.left
    }

    pub const fn right(&self) -> Branch {
        self.right
    }

    /// Returns true if the node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns true if the node has been joined under a parent.
    pub const fn is_attached(&self) -> bool {
        self.attached
    }
}
