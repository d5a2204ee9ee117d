use std::iter::FusedIterator;

use super::CircularQueue;

impl<T> IntoIterator for CircularQueue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            queue: self,
        }
    }
}

/// An owned iterator which drains a [`CircularQueue`] in FIFO order.
pub struct IntoIter<T> {
    // The queue already knows how to hand out its values in order, so the iterator just removes
    // from it.
    pub(crate) queue: CircularQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.try_remove().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.queue.size()
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            queue: self,
            front: 0,
            back: self.size(),
        }
    }
}

/// A borrowed iterator over a [`CircularQueue`], from the front of the queue to the back.
pub struct Iter<'a, T> {
    pub(crate) queue: &'a CircularQueue<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let value = self.queue.try_get(self.front).ok();
            self.front += 1;
            value
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.queue.try_get(self.back).ok()
        } else {
            None
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}
