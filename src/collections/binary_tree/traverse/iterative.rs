use super::super::{BinaryTree, Branch, NodeId};
use crate::collections::contiguous::{FastGrowableStack, RawBuffer};

/// Visits nodes in preorder using an explicit stack. The right child is pushed before the left so
/// that the left subtree is popped and visited first.
pub fn iterative_preorder<T, F>(tree: &BinaryTree<T>, root: Branch, mut visit: F)
where
    F: FnMut(NodeId, &T),
{
    let mut stack = FastGrowableStack::new();
    stack.extend(root);

    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        visit(id, &node.value);
        stack.extend(node.right);
        stack.extend(node.left);
    }
}

/// Visits nodes in inorder using an explicit stack and a visited flag per node.
///
/// The node on top of the stack is only visited once its left child has been, so that the left
/// subtree is always finished first. After visiting a node, its right child takes its place on the
/// stack.
///
/// The visited flags are indexed by [`NodeId`], so they cover the whole arena rather than just the
/// subtree below `root`. Each call allocates `O(tree.size())` flags, even when starting from a
/// small subtree of a large tree. [`iterative_inorder`] produces the same order without them.
pub fn iterative_inorder_with_marking<T, F>(tree: &BinaryTree<T>, root: Branch, mut visit: F)
where
    F: FnMut(NodeId, &T),
{
    // Every id reachable from the root indexes into this buffer.
    let mut visited = RawBuffer::<bool>::new(tree.size());
    let mut stack = FastGrowableStack::new();
    stack.extend(root);

    while let Some(&id) = stack.last() {
        let node = tree.node(id);
        match node.left {
            Some(left) if !visited[left.0] => stack.push(left),
            _ => {
                stack.pop();
                visit(id, &node.value);
                visited[id.0] = true;
                stack.extend(node.right);
            },
        }
    }
}

/// Visits nodes in inorder using an explicit stack of the ancestors whose left subtree is still
/// being walked.
pub fn iterative_inorder<T, F>(tree: &BinaryTree<T>, root: Branch, mut visit: F)
where
    F: FnMut(NodeId, &T),
{
    let mut stack = FastGrowableStack::new();
    let mut curr = root;

    loop {
        while let Some(id) = curr {
            stack.push(id);
            curr = tree.left(id);
        }

        let Some(id) = stack.pop() else { break };
        let node = tree.node(id);
        visit(id, &node.value);
        curr = node.right;
    }
}

/// Visits nodes in postorder using a single explicit stack.
///
/// While descending, the next node is the left child if there is one, otherwise the right child.
/// Once a descent ends, the top of the stack is visited and popped. If the node underneath it is
/// the visited node's parent through its left link, the parent's right subtree still needs walking,
/// so its right child is pushed and the descent continues from there.
pub fn iterative_postorder<T, F>(tree: &BinaryTree<T>, root: Branch, mut visit: F)
where
    F: FnMut(NodeId, &T),
{
    let Some(root) = root else { return };
    let mut stack = FastGrowableStack::new();
    stack.push(root);
    let mut descend = Some(root);

    while !stack.is_empty() {
        match descend {
            Some(id) => {
                let node = tree.node(id);
                descend = node.left.or(node.right);
                stack.extend(descend);
            },
            None => {
                let Some(id) = stack.pop() else { break };
                visit(id, tree.value(id));

                if let Some(&parent) = stack.last() {
                    let parent = tree.node(parent);
                    if parent.left == Some(id) && parent.right.is_some() {
                        stack.extend(parent.right);
                        descend = parent.right;
                    }
                }
            },
        }
    }
}
