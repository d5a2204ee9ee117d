use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::ptr;

use super::GrowableStack;
use crate::collections::contiguous::RawBuffer;

impl<T, R> IntoIterator for GrowableStack<T, R> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let result = IntoIter {
            buf: self.buf.take(),
            start: 0,
            end: self.len,
        };
        // The values now belong to the iterator.
        self.len = 0;
        mem::drop(self);
        result
    }
}

/// An owned iterator over the values of a [`GrowableStack`], from the bottom of the stack to the
/// top.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuffer<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: All values in start..end are initialized. Incrementing start afterwards means
            // the value is never read again, effectively moving it out of the buffer.
            let value = unsafe { self.buf[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The value at end was initialized and is now excluded from start..end, so it
            // is never read again.
            Some(unsafe { self.buf[self.end].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = &mut self.buf[self.start..self.end];
        // SAFETY: All values in start..end are initialized and haven't been yielded.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                remaining.as_mut_ptr().cast::<T>(),
                remaining.len(),
            ));
        }
    }
}
