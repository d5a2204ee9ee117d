//! Depth-first traversals of a [`BinaryTree`](super::BinaryTree).
//!
//! Every traversal takes the tree, the root to start from and a visitor which is called once per
//! reachable node with the node's [`NodeId`](super::NodeId) and value. Starting from [`None`]
//! visits nothing. Each order has several interchangeable implementations that always produce the
//! same sequence of visits:
//!
//! | Order | Implementations |
//! |-|-|
//! | Preorder | [`recursive_preorder`], [`iterative_preorder`] |
//! | Inorder | [`recursive_inorder`], [`iterative_inorder`], [`iterative_inorder_with_marking`], [`morris_inorder`] |
//! | Postorder | [`recursive_postorder`], [`iterative_postorder`] |
//!
//! The recursive forms use call depth proportional to the height of the tree. The iterative forms
//! keep their pending nodes in a [`FastGrowableStack`](crate::collections::contiguous::FastGrowableStack)
//! instead, and [`morris_inorder`] uses no extra storage at all.

mod iterative;
mod morris;
mod recursive;

pub use iterative::*;
pub use morris::*;
pub use recursive::*;
