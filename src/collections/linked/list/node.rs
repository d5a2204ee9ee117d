use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T> rather than alloc, because Box<T> has the special property
// that dereferencing it allows a value to be moved out of the heap.

/// A non-owning handle to a heap allocated [`Node`]. Ownership of every node belongs to the list
/// as a whole; a NodePtr is only ever turned back into a Box once, when its node is unlinked.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr held by a list always points to a live node.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: A NodePtr held by a list always points to a live node, and the list hands out
        // mutable access only through a mutable borrow of itself.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: A NodePtr held by a list always points to a live node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: A NodePtr held by a list always points to a live node, and links are only
        // modified through a mutable borrow of the list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the node, freeing its allocation and returning its contents.
    ///
    /// # Safety
    /// The node must still be allocated and no other NodePtr to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by Box in from_node, and the caller guarantees it hasn't
        // been reclaimed already.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
