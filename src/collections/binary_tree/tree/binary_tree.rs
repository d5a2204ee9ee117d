use std::fmt::{self, Debug, Display, Formatter};

use super::{AlreadyAttached, Branch, NodeId, TreeError, TreeNode};
use crate::collections::contiguous::GrowableStack;
use crate::util::result::ResultExtension;

/// A binary tree whose nodes live in a single contiguous arena and refer to their children by
/// [`NodeId`].
///
/// Trees are built from the bottom up: [`leaf`](BinaryTree::leaf) creates a childless node and
/// [`join`](BinaryTree::join) creates a parent over nodes that already exist. A node can only be
/// joined under one parent, so every node reachable from a root is reachable along exactly one
/// path. The tree places no ordering constraint on its values.
///
/// A single arena may hold several disjoint trees at once; any node without a parent can be used
/// as the root of a traversal.
///
/// # Examples
/// ```
/// # use primitive_collections::collections::binary_tree::{BinaryTree, traverse};
/// let mut tree = BinaryTree::new();
/// let left = tree.leaf(1);
/// let right = tree.leaf(3);
/// let root = tree.join(2, Some(left), Some(right));
///
/// let mut values = Vec::new();
/// traverse::recursive_inorder(&tree, Some(root), |_, v| values.push(*v));
/// assert_eq!(values, [1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryTree<T> {
    pub(crate) nodes: GrowableStack<TreeNode<T>>,
}

impl<T> BinaryTree<T> {
    /// Creates a new BinaryTree with no nodes.
    pub fn new() -> BinaryTree<T> {
        BinaryTree {
            nodes: GrowableStack::new(),
        }
    }

    /// Creates a new BinaryTree with room for `cap` nodes before growing.
    pub fn with_cap(cap: usize) -> BinaryTree<T> {
        BinaryTree {
            nodes: GrowableStack::with_cap(cap),
        }
    }

    /// Returns the number of nodes in the BinaryTree, across every root.
    pub const fn size(&self) -> usize {
        self.nodes.size()
    }

    /// Returns true if the BinaryTree contains no nodes.
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a node with no children.
    pub fn leaf(&mut self, value: T) -> NodeId {
        self.join(value, None, None)
    }

    /// Creates a node with the provided children, which are attached to it.
    ///
    /// # Panics
    /// Panics if either child doesn't exist in this tree, already has a parent, or if both
    /// children are the same node.
    pub fn join(&mut self, value: T, left: Branch, right: Branch) -> NodeId {
        self.try_join(value, left, right).throw()
    }

    /// Creates a node with the provided children, returning an [`Err`] rather than panicking if a
    /// child is unknown, already attached or given twice. Nothing is changed when it fails.
    pub fn try_join(&mut self, value: T, left: Branch, right: Branch) -> Result<NodeId, TreeError> {
        for child in left.into_iter().chain(right) {
            if self.try_node(child)?.attached {
                return Err(AlreadyAttached { node: child }.into());
            }
        }
        if let (Some(child), true) = (left, left == right) {
            return Err(AlreadyAttached { node: child }.into());
        }

        for child in left.into_iter().chain(right) {
            self.nodes[child.0].attached = true;
        }

        let id = NodeId(self.nodes.size());
        self.nodes.push(TreeNode::new(value, left, right));
        Ok(id)
    }

    /// Returns the node referred to by `id`.
    ///
    /// # Panics
    /// Panics if `id` doesn't refer to a node in this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode<T> {
        self.try_node(id).throw()
    }

    /// Returns the node referred to by `id`, returning an [`Err`] rather than panicking if it
    /// doesn't exist in this tree.
    pub fn try_node(&self, id: NodeId) -> Result<&TreeNode<T>, TreeError> {
        Ok(self.nodes.try_get(id.0)?)
    }

    /// Returns a reference to the value stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` doesn't refer to a node in this tree.
    pub fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    /// Returns a mutable reference to the value stored at `id`. The shape of the tree can't be
    /// changed through it.
    ///
    /// # Panics
    /// Panics if `id` doesn't refer to a node in this tree.
    pub fn value_mut(&mut self, id: NodeId) -> &mut T {
        self.try_value_mut(id).throw()
    }

    /// Returns a mutable reference to the value stored at `id`, returning an [`Err`] rather than
    /// panicking if it doesn't exist in this tree.
    pub fn try_value_mut(&mut self, id: NodeId) -> Result<&mut T, TreeError> {
        Ok(&mut self.nodes.try_get_mut(id.0)?.value)
    }

    /// # Panics
    /// Panics if `id` doesn't refer to a node in this tree.
    pub fn left(&self, id: NodeId) -> Branch {
        self.node(id).left
    }

    /// # Panics
    /// Panics if `id` doesn't refer to a node in this tree.
    pub fn right(&self, id: NodeId) -> Branch {
        self.node(id).right
    }

    /// Returns every node that hasn't been joined under a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.attached)
            .map(|(index, _)| NodeId(index))
    }

    /// Overwrites the right link of `id` without touching any attachment state. Only used to
    /// thread and unthread nodes during a traversal.
    pub(crate) fn set_right(&mut self, id: NodeId, right: Branch) {
        self.nodes[id.0].right = right;
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("nodes", &&*self.nodes)
            .field("size", &self.size())
            .finish()
    }
}

impl<T: Debug> Display for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, root) in self.roots().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?}", DebugBranch {
                tree: self,
                branch: Some(root),
            })?;
        }
        Ok(())
    }
}

/// Draws a branch sideways, with the left subtree above its parent and the right subtree below.
struct DebugBranch<'a, T> {
    tree: &'a BinaryTree<T>,
    branch: Branch,
}

impl<T: Debug> Debug for DebugBranch<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.branch {
            Some(id) => {
                let node = &self.tree.nodes[id.0];
                let child = |branch, prefix: &str| {
                    format!("{:?}", DebugBranch {
                        tree: self.tree,
                        branch,
                    })
                    .lines()
                    .map(|l| String::from(prefix) + l)
                    .collect::<GrowableStack<_>>()
                    .join("\n")
                };

                write!(
                    f,
                    "{}\n({:?})\n{}",
                    child(node.left, "┌    "),
                    node.value,
                    child(node.right, "└    ")
                )
            },
            None => write!(f, "-"),
        }
    }
}
