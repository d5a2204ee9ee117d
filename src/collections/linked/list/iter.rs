use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{Link, LinkedList, ListContents, ListState};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator which drains a [`LinkedList`] from head to tail.
pub struct IntoIter<T> {
    // There is no point me rewriting all of this when the iterator can just hold the list and call
    // remove.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_remove().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.size()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: first_link(&self.state),
            remaining: self.size(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over a [`LinkedList`], from head to tail.
pub struct Iter<'a, T> {
    // The iterator follows the same links as the list without ever modifying the nodes.
    pub(crate) next: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = *node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            next: first_link(&self.state),
            remaining: self.size(),
            _phantom: PhantomData,
        }
    }
}

/// A mutable borrowed iterator over a [`LinkedList`], from head to tail.
pub struct IterMut<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = *node.next();
        self.remaining -= 1;
        // Each node is yielded once, so the mutable references never alias.
        Some(node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

const fn first_link<T>(state: &ListState<T>) -> Link<T> {
    match state {
        Empty => None,
        Full(ListContents { head, .. }) => Some(*head),
    }
}
