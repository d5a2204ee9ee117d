use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in one direction, usable as either a queue or a stack.
///
/// Values are [`add`](LinkedList::add)ed at the tail and [`remove`](LinkedList::remove)d from the
/// head for queue access, or [`push`](LinkedList::push)ed and [`pop`](LinkedList::pop)ped at the
/// head for stack access. The list keeps a pointer to its tail purely so that appending is `O(1)`;
/// every node is owned by the list through the chain starting at the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `add` | `O(1)` |
/// | `push` | `O(1)` |
/// | `remove/pop` | `O(1)` |
/// | `clone` | `O(n)` |
#[derive(PartialEq, Eq)]
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    /// Only used to append, never to free. Its `next` link is always None.
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn size(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Appends the provided element to the tail of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.remove(), 1);
    /// assert_eq!(list.remove(), 2);
    /// ```
    pub fn add(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Prepends the provided element to the head of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push(1);
    /// list.push(2);
    /// assert_eq!(list.pop(), 2);
    /// assert_eq!(list.pop(), 1);
    /// ```
    pub fn push(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Removes the element at the head of the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn remove(&mut self) -> T {
        self.try_remove().throw()
    }

    /// Removes the element at the head of the list and returns it, returning an [`Err`] rather
    /// than panicking if the list is empty.
    pub fn try_remove(&mut self) -> Result<T, EmptyCollection> {
        match &mut self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is owned by this list and is unlinked right after.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { node.next.unreachable() };
                        *len = new_len;
                    },
                    // The removed node was also the tail, which disappears with the state.
                    None => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Removes the element at the head of the list and returns it. This is the same operation as
    /// [`LinkedList::remove`], named for stack usage.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop(&mut self) -> T {
        self.remove()
    }

    /// Removes the element at the head of the list and returns it, returning an [`Err`] rather
    /// than panicking if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::{linked::LinkedList, EmptyCollection};
    /// let mut list = LinkedList::new();
    /// list.push(1);
    /// assert_eq!(list.try_pop(), Ok(1));
    /// assert_eq!(list.try_pop(), Err(EmptyCollection));
    /// ```
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.try_remove()
    }

    /// Returns a reference to the element at the head of the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    /// Returns a reference to the element at the head of the list, returning an [`Err`] rather than
    /// panicking if the list is empty.
    pub const fn try_peek(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns a mutable reference to the element at the head of the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn peek_mut(&mut self) -> &mut T {
        self.try_peek_mut().throw()
    }

    /// Returns a mutable reference to the element at the head of the list, returning an [`Err`]
    /// rather than panicking if the list is empty.
    pub const fn try_peek_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { head, .. }) => Ok(head.value_mut()),
        }
    }

    /// Returns a reference to the element at the tail of the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a borrowed iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a mutable borrowed iterator from head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Walks the list, checking that the tail is the last node reachable from the head and that
    /// the stored length matches the number of nodes.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut curr = head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    curr = *next;
                    count += 1;
                }
                assert!(tail == curr, "The tail should be the last node reachable from the head.");
                assert_eq!(len.get(), count, "The length should match the number of nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).or_throw(CapacityOverflow);

        let node = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });

        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).or_throw(CapacityOverflow);

        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    // SAFETY: Every node reachable from the head is owned by this list and is
                    // reclaimed exactly once, after its successor has been read.
                    let node = unsafe { ptr.take_node() };
                    curr = node.next;
                }
            },
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ListState<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Empty, Empty) => true,
            (Full(a), Full(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for ListState<T> {}

impl<T: PartialEq> PartialEq for ListContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // Both sides have the same length, so if they aren't both Some, they are both None.
                _ => break true,
            }
        }
    }
}

impl<T: Eq> Eq for ListContents<T> {}

// SAFETY: LinkedList uniquely owns all of its nodes, so it is safe for Send when T: Send.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: LinkedList's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that LinkedList<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self))
            .field("len", &self.size())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}

struct DebugEntries<'a, T>(&'a LinkedList<T>);

impl<T: Debug> Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
