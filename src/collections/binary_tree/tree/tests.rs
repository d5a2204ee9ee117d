#![cfg(test)]

use super::*;
use crate::collections::contiguous::GrowableStack;
use crate::util::panic::assert_panics;

#[test]
fn test_build_bottom_up() {
    let mut tree = BinaryTree::new();
    assert!(tree.is_empty());

    let a = tree.leaf('a');
    let b = tree.leaf('b');
    let root = tree.join('r', Some(a), Some(b));

    assert_eq!(tree.size(), 3);
    assert_eq!(root.index(), 2, "Nodes should be numbered in creation order.");
    assert_eq!(tree.left(root), Some(a));
    assert_eq!(tree.right(root), Some(b));
    assert!(tree.node(a).is_leaf());
    assert!(tree.node(a).is_attached());
    assert!(!tree.node(root).is_attached());
    assert_eq!(tree.roots().collect::<GrowableStack<_>>()[..], [root]);

    *tree.value_mut(b) = 'B';
    assert_eq!(*tree.value(b), 'B');
    assert_eq!(*tree.node(b).value(), 'B');
}

#[test]
fn test_join_errors() {
    let mut tree = BinaryTree::new();
    let a = tree.leaf(1);
    let b = tree.leaf(2);
    tree.join(3, Some(a), None);

    assert_eq!(
        tree.try_join(4, Some(a), None),
        Err(TreeError::AlreadyAttached(AlreadyAttached { node: a })),
        "A node shouldn't be able to gain a second parent."
    );
    assert_eq!(
        tree.try_join(4, Some(b), Some(b)),
        Err(TreeError::AlreadyAttached(AlreadyAttached { node: b })),
        "A node shouldn't be both children of the same parent."
    );
    assert_eq!(
        tree.try_join(4, None, Some(NodeId(10))),
        Err(TreeError::UnknownNode(IndexOutOfBounds { index: 10, len: 3 }))
    );
    assert!(!tree.node(b).is_attached(), "A failed join shouldn't attach anything.");
    assert_eq!(tree.size(), 3, "A failed join shouldn't create a node.");

    assert_panics!({ BinaryTree::<u8>::new().value(NodeId(0)); }, "out of bounds");
    let mut clone = tree.clone();
    assert_panics!({ clone.join(5, Some(a), None); }, "already attached");
}

#[test]
fn test_several_roots() {
    let mut tree = BinaryTree::new();
    let a = tree.leaf(1);
    let b = tree.leaf(2);
    let c = tree.leaf(3);
    let d = tree.join(4, None, Some(b));

    assert_eq!(tree.roots().collect::<GrowableStack<_>>()[..], [a, c, d]);
    assert_eq!(tree.try_node(d).map(TreeNode::right), Ok(Some(b)));
}

#[test]
fn test_display() {
    let mut tree = BinaryTree::new();
    let a = tree.leaf(1);
    let root = tree.join(2, Some(a), None);

    assert_eq!(tree.to_string(), "┌    ┌    -\n┌    (1)\n┌    └    -\n(2)\n└    -");
    assert_eq!(tree.left(root), Some(a));
    assert_eq!(NodeId(7).to_string(), "#7");
    assert_eq!(
        AlreadyAttached { node: NodeId(7) }.to_string(),
        "Node #7 is already attached to a parent!"
    );
}

#[test]
fn test_equality_and_clone() {
    let mut tree = BinaryTree::with_cap(2);
    let a = tree.leaf("x");
    tree.join("y", None, Some(a));

    let mut other = tree.clone();
    assert_eq!(tree, other);
    *other.value_mut(a) = "z";
    assert_ne!(tree, other);
    assert_eq!(BinaryTree::<u8>::default(), BinaryTree::new());
}
