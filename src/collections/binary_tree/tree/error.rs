use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::NodeId;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// A node was given a parent while it already had one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyAttached {
    pub node: NodeId,
}

impl Display for AlreadyAttached {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node {} is already attached to a parent!", self.node)
    }
}

impl Error for AlreadyAttached {}

/// An error produced while building or reading a [`BinaryTree`](super::BinaryTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum TreeError {
    /// The [`NodeId`] doesn't refer to a node in this tree.
    UnknownNode(IndexOutOfBounds),
    AlreadyAttached(AlreadyAttached),
}
