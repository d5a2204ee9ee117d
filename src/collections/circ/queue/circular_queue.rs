use std::fmt::{self, Debug, Display, Formatter};
use std::mem::MaybeUninit;
use std::ops::{Index, IndexMut};
use std::ptr;

use super::Iter;
use crate::collections::contiguous::RawBuffer;
use crate::collections::contiguous::capacity::{self, DEFAULT_CAP};
use crate::collections::contiguous::stack::{MoveRelocate, Relocate};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A first-in-first-out queue over a [`RawBuffer`]. Values are never shifted when the head is
/// removed; instead, the logical head moves forward and logical indices wrap around the end of the
/// buffer.
///
/// Logical index `i` lives in physical slot `(start + i) % cap`. Every resize relocates the values
/// into logical order at the front of the new buffer and resets `start` to 0. Resizes follow the
/// same policy as [`GrowableStack`](crate::collections::contiguous::GrowableStack).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `size` | `O(1)` |
/// | `add` | `O(1)`, `O(n)`* |
/// | `remove` | `O(1)`, `O(n)`* |
///
/// \* When the operation triggers a resize.
pub struct CircularQueue<T> {
    pub(crate) buf: RawBuffer<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates a new, empty CircularQueue with the default capacity of 4.
    pub fn new() -> CircularQueue<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty CircularQueue with exactly the provided capacity.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> CircularQueue<T> {
        CircularQueue {
            buf: RawBuffer::new_uninit(cap),
            start: 0,
            len: 0,
        }
    }

    /// Returns the number of values in the CircularQueue.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the CircularQueue contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values the CircularQueue can hold before it has to grow.
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Adds `value` to the back of the queue, growing first if the queue is full.
    ///
    /// # Panics
    /// Panics if growing would overflow the maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::circ::CircularQueue;
    /// let mut queue = CircularQueue::new();
    /// for i in 0..6 {
    ///     queue.add(i);
    /// }
    /// for i in 0..6 {
    ///     assert_eq!(queue.remove(), i);
    /// }
    /// assert!(queue.is_empty());
    /// ```
    pub fn add(&mut self, value: T) {
        self.try_add(value).throw()
    }

    /// Adds `value` to the back of the queue, returning an [`Err`] rather than panicking if growing
    /// would overflow the maximum capacity.
    pub fn try_add(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.resize(capacity::resized_cap(self.len)?);
        }

        let slot = self.physical_index(self.len);
        self.buf[slot] = MaybeUninit::new(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at the front of the queue. Shrinks the capacity afterwards if
    /// the queue has become sparse.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn remove(&mut self) -> T {
        self.try_remove().throw()
    }

    /// Removes and returns the value at the front of the queue, returning an [`Err`] rather than
    /// panicking if the queue is empty.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::{circ::CircularQueue, EmptyCollection};
    /// let mut queue = CircularQueue::new();
    /// queue.add('a');
    /// assert_eq!(queue.try_remove(), Ok('a'));
    /// assert_eq!(queue.try_remove(), Err(EmptyCollection));
    /// ```
    pub fn try_remove(&mut self) -> Result<T, EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        // SAFETY: The queue isn't empty, so the slot at start holds the initialized head. Moving
        // start past it means the value is never read again.
        let value = unsafe { self.buf[self.start].assume_init_read() };
        self.start = (self.start + 1) % self.cap();
        self.len -= 1;

        if let Some(new_cap) = capacity::shrunk_cap(self.cap(), self.len) {
            self.resize(new_cap);
        }

        Ok(value)
    }

    /// Returns a reference to the value at the front of the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    /// Returns a reference to the value at the front of the queue, returning an [`Err`] rather than
    /// panicking if the queue is empty.
    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.try_get(0).map_err(|_| EmptyCollection)
    }

    /// Returns a reference to the value at logical `index`, where 0 is the front of the queue.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the value at logical `index`, returning an [`Err`] rather than
    /// panicking if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the physical slot holds an initialized value.
        Ok(unsafe { self.buf[self.physical_index(index)].assume_init_ref() })
    }

    /// Returns a mutable reference to the value at logical `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the value at logical `index`, returning an [`Err`] rather
    /// than panicking if `index` is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        let slot = self.physical_index(index);
        // SAFETY: index < len, so the physical slot holds an initialized value.
        Ok(unsafe { self.buf[slot].assume_init_mut() })
    }

    /// Returns a borrowed iterator over the values, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Maps a logical index onto the physical slot that holds it. Requires a non-zero capacity.
    pub(crate) const fn physical_index(&self, index: usize) -> usize {
        (self.start + index) % self.buf.size()
    }

    /// Returns the two physical ranges holding the values in logical order, as `(start, len)`
    /// pairs. The second range is empty unless the values wrap around the end of the buffer.
    pub(crate) fn segments(&self) -> ((usize, usize), (usize, usize)) {
        let head_len = self.len.min(self.cap() - self.start);
        ((self.start, head_len), (0, self.len - head_len))
    }

    /// Moves all values into a new buffer with capacity `new_cap` in logical order, resetting
    /// start to 0. `new_cap` must be at least the current length.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let mut new_buf = RawBuffer::<T>::new_uninit(new_cap);
        let ((head_start, head_len), (_, tail_len)) = self.segments();
        let src = self.buf.as_ptr().cast::<T>();
        let dst = new_buf.as_mut_ptr().cast::<T>();

        // SAFETY: Both segments are initialized and within buf, they total len values, new_buf
        // has room for at least len values and the two allocations are distinct. The old values
        // are forgotten when buf is replaced, because it only holds MaybeUninit<T>.
        unsafe {
            MoveRelocate::relocate(src.add(head_start), dst, head_len);
            MoveRelocate::relocate(src, dst.add(head_len), tail_len);
        }

        self.buf = new_buf;
        self.start = 0;
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut queue = CircularQueue::with_cap(iter.size_hint().0.max(DEFAULT_CAP));
        queue.extend(iter);
        queue
    }
}

impl<T> Index<usize> for CircularQueue<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for CircularQueue<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularQueue<T> {
    fn drop(&mut self) {
        let ((head_start, head_len), (_, tail_len)) = self.segments();
        let base = self.buf.as_mut_ptr().cast::<T>();

        // SAFETY: Exactly the len values in the two segments are initialized and safe to drop.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(head_start), head_len));
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base, tail_len));
        }
    }
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        let mut queue = CircularQueue::with_cap(self.cap());
        queue.extend(self.iter().cloned());
        queue
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("contents", &DebugEntries(self))
            .field("start", &self.start)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

struct DebugEntries<'a, T>(&'a CircularQueue<T>);

impl<T: Debug> Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
