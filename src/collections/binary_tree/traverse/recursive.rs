use super::super::{BinaryTree, Branch, NodeId};

/// Visits a node, then its left subtree, then its right subtree.
pub fn recursive_preorder<T, F>(tree: &BinaryTree<T>, root: Branch, mut visit: F)
where
    F: FnMut(NodeId, &T),
{
    preorder_from(tree, root, &mut visit);
}

fn preorder_from<T, F>(tree: &BinaryTree<T>, branch: Branch, visit: &mut F)
where
    F: FnMut(NodeId, &T),
{
    if let Some(id) = branch {
        let node = tree.node(id);
        visit(id, &node.value);
        preorder_from(tree, node.left, visit);
        preorder_from(tree, node.right, visit);
    }
}

/// Visits a node's left subtree, then the node, then its right subtree.
pub fn recursive_inorder<T, F>(tree: &BinaryTree<T>, root: Branch, mut visit: F)
where
    F: FnMut(NodeId, &T),
{
    inorder_from(tree, root, &mut visit);
}

fn inorder_from<T, F>(tree: &BinaryTree<T>, branch: Branch, visit: &mut F)
where
    F: FnMut(NodeId, &T),
{
    if let Some(id) = branch {
        let node = tree.node(id);
        inorder_from(tree, node.left, visit);
        visit(id, &node.value);
        inorder_from(tree, node.right, visit);
    }
}

/// Visits a node's left subtree, then its right subtree, then the node.
pub fn recursive_postorder<T, F>(tree: &BinaryTree<T>, root: Branch, mut visit: F)
where
    F: FnMut(NodeId, &T),
{
    postorder_from(tree, root, &mut visit);
}

fn postorder_from<T, F>(tree: &BinaryTree<T>, branch: Branch, visit: &mut F)
where
    F: FnMut(NodeId, &T),
{
    if let Some(id) = branch {
        let node = tree.node(id);
        postorder_from(tree, node.left, visit);
        postorder_from(tree, node.right, visit);
        visit(id, &node.value);
    }
}
