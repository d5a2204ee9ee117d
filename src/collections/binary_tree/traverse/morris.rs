use super::super::{BinaryTree, Branch, NodeId};

/// Visits nodes in inorder without a stack, by temporarily threading the tree.
///
/// Before descending into a node's left subtree, the rightmost node of that subtree (its inorder
/// predecessor) has its empty right link pointed back at the node. Reaching the node again through
/// that thread means the left subtree is finished, so the thread is removed and the node is
/// visited. The tree needs to be borrowed mutably to hold the threads, but every right link is
/// restored by the time the traversal returns, leaving the tree exactly as it was found. This also
/// holds if `visit` panics: the rest of the walk is finished without visiting while unwinding, so
/// no thread outlives the call.
///
/// # Panics
/// Panics if `root` doesn't refer to a node in `tree`.
pub fn morris_inorder<T, F>(tree: &mut BinaryTree<T>, root: Branch, mut visit: F)
where
    F: FnMut(NodeId, &T),
{
    if let Some(id) = root {
        // Checked before any thread exists, so that the walk itself never panics.
        let _ = tree.node(id);
    }

    let mut walk = MorrisWalk {
        tree,
        curr: root,
    };
    while let Some(id) = walk.step() {
        visit(id, walk.tree.value(id));
    }
}

/// The state of a threading walk. Dropping it runs the walk to completion, which removes any
/// threads still in place.
struct MorrisWalk<'a, T> {
    tree: &'a mut BinaryTree<T>,
    curr: Branch,
}

impl<T> MorrisWalk<'_, T> {
    /// Advances to the next node in inorder and returns it. `curr` is moved past the returned node
    /// before it is handed out, so the walk can always resume from `curr`.
    fn step(&mut self) -> Option<NodeId> {
        while let Some(id) = self.curr {
            match self.tree.left(id) {
                None => {
                    self.curr = self.tree.right(id);
                    return Some(id);
                },
                Some(left) => {
                    let mut pred = left;
                    while let Some(next) = self.tree.right(pred).filter(|&next| next != id) {
                        pred = next;
                    }

                    match self.tree.right(pred) {
                        None => {
                            self.tree.set_right(pred, Some(id));
                            self.curr = Some(left);
                        },
                        // The predecessor already threads back here, so the left subtree is done.
                        Some(_) => {
                            self.tree.set_right(pred, None);
                            self.curr = self.tree.right(id);
                            return Some(id);
                        },
                    }
                },
            }
        }
        None
    }
}

impl<T> Drop for MorrisWalk<'_, T> {
    fn drop(&mut self) {
        while self.step().is_some() {}
    }
}
