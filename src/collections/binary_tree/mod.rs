//! An arena-backed [`BinaryTree`] and a set of [`traverse`] functions over it.

pub mod traverse;
pub mod tree;

#[doc(inline)]
pub use tree::{AlreadyAttached, BinaryTree, Branch, NodeId, TreeError, TreeNode};
