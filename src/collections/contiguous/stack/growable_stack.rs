use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::{CopyRelocate, MoveRelocate, Relocate};
use crate::collections::contiguous::RawBuffer;
use crate::collections::contiguous::capacity::{self, DEFAULT_CAP};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A [`GrowableStack`] which relocates values with a single bulk copy when it resizes. Only
/// available for [`Copy`] types.
pub type FastGrowableStack<T> = GrowableStack<T, CopyRelocate>;

/// An index-addressable sequence over a [`RawBuffer`], which grows and shrinks its capacity as
/// values are added and removed.
///
/// The capacity grows by half of the current length once the stack is full, and shrinks by the
/// same formula once no more than a third of it is occupied. The gap between those two thresholds
/// means alternating adds and removes never resize back and forth.
///
/// The `R` parameter picks how values are carried over into a new buffer during a resize. See
/// [`Relocate`], [`MoveRelocate`] (the default) and [`FastGrowableStack`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the GrowableStack.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `size` | `O(1)` |
/// | `add` | `O(n-i)`, `O(n)`* |
/// | `remove` | `O(n-i)`, `O(n)`* |
/// | `push` | `O(1)`, `O(n)`* |
/// | `pop` | `O(1)`, `O(n)`* |
///
/// \* When the operation triggers a resize. Resizes are spread over enough cheap operations that
/// the amortized cost stays `O(1)` for `push` and `pop`.
pub struct GrowableStack<T, R = MoveRelocate> {
    pub(crate) buf: RawBuffer<MaybeUninit<T>>,
    pub(crate) len: usize,
    pub(crate) _strategy: PhantomData<R>,
}

impl<T, R: Relocate<T>> GrowableStack<T, R> {
    /// Creates a new, empty GrowableStack with the default capacity of 4.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::GrowableStack;
    /// let stack: GrowableStack<u8> = GrowableStack::new();
    /// assert_eq!(stack.size(), 0);
    /// assert_eq!(stack.cap(), 4);
    /// ```
    pub fn new() -> GrowableStack<T, R> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty GrowableStack with exactly the provided capacity.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> GrowableStack<T, R> {
        GrowableStack {
            buf: RawBuffer::new_uninit(cap),
            len: 0,
            _strategy: PhantomData,
        }
    }

    /// Returns the number of values in the GrowableStack.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the GrowableStack contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values the GrowableStack can hold before it has to grow.
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Returns a reference to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the value at `index`, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { self.buf[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the value at `index`, returning an [`Err`] rather than
    /// panicking if `index` is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { self.buf[index].assume_init_mut() })
    }

    /// Replaces the value at `index` with `value`, returning the previous one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::GrowableStack;
    /// let mut stack: GrowableStack<_> = ["a", "b"].into_iter().collect();
    /// assert_eq!(stack.set(1, "c"), "b");
    /// assert_eq!(&*stack, &["a", "c"]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Replaces the value at `index`, returning the previous value or an [`Err`] rather than
    /// panicking if `index` is out of bounds.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe {
            mem::replace(&mut self.buf[index], MaybeUninit::new(value)).assume_init()
        })
    }

    /// Inserts `value` at `index`, moving every value after it one position towards the tail.
    /// An `index` equal to the current size appends the value.
    ///
    /// # Panics
    /// Panics if `index` is greater than the size of the GrowableStack, or if growing would
    /// overflow the maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::GrowableStack;
    /// let mut stack: GrowableStack<_> = (0..3).collect();
    /// stack.add(1, 100);
    /// stack.add(4, 200);
    /// assert_eq!(&*stack, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn add(&mut self, index: usize, value: T) {
        self.try_add(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking if `index` is greater
    /// than the length or growing would overflow the maximum capacity.
    pub fn try_add(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            }.into());
        }

        if self.len == self.cap() {
            self.resize(capacity::resized_cap(self.len)?);
        }

        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.buf[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at `index`, moving every value after it one position towards
    /// the head. Shrinks the capacity afterwards if the stack has become sparse.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::GrowableStack;
    /// let mut stack: GrowableStack<_> = "Hello!".chars().collect();
    /// assert_eq!(stack.remove(1), 'e');
    /// assert_eq!(&*stack, &['H', 'l', 'l', 'o', '!']);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the value at `index`, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.buf[i], next);
        }

        self.len -= 1;

        if let Some(new_cap) = capacity::shrunk_cap(self.cap(), self.len) {
            self.resize(new_cap);
        }

        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Pushes `value` onto the end of the GrowableStack, growing if required.
    ///
    /// # Panics
    /// Panics if growing would overflow the maximum capacity.
    pub fn push(&mut self, value: T) {
        self.add(self.len, value)
    }

    /// Pops the last value off the end of the GrowableStack, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        match self.len.checked_sub(1) {
            Some(last) => self.try_remove(last).ok(),
            None => None,
        }
    }

    /// Returns a reference to the last value, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.deref().last()
    }

    /// Moves all values into a new buffer with capacity `new_cap`, which must be at least the
    /// current length.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let mut new_buf = RawBuffer::<T>::new_uninit(new_cap);

        // SAFETY: The first len values of buf are initialized, new_buf has room for at least len
        // values and the two allocations are distinct. The old values are forgotten when buf is
        // replaced, because it only holds MaybeUninit<T>.
        unsafe {
            R::relocate(self.buf.as_ptr().cast(), new_buf.as_mut_ptr().cast(), self.len);
        }

        self.buf = new_buf;
    }

    /// Checks that the provided index refers to an occupied position.
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

impl<T, R: Relocate<T>> Extend<T> for GrowableStack<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, R: Relocate<T>> FromIterator<T> for GrowableStack<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut stack = GrowableStack::with_cap(iter.size_hint().0.max(DEFAULT_CAP));
        stack.extend(iter);
        stack
    }
}

impl<T, R: Relocate<T>> Default for GrowableStack<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Drop for GrowableStack<T, R> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>(),
                self.len,
            ));
        }

        // Implicitly drop self.buf, containing only MaybeUninit values without a no-op drop.
        // Doing so also deallocates the owned memory.
    }
}

impl<T, R> Deref for GrowableStack<T, R> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: GrowableStack is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within buf.
        unsafe {
            slice::from_raw_parts(self.buf.as_ptr().cast(), self.len)
        }
    }
}

impl<T, R> DerefMut for GrowableStack<T, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: GrowableStack is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within buf. The
        // mutable borrow of self prevents aliasing.
        unsafe {
            slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len)
        }
    }
}

impl<T: Clone, R: Relocate<T>> Clone for GrowableStack<T, R> {
    fn clone(&self) -> Self {
        let mut stack = Self::with_cap(self.cap());

        for value in self.iter() {
            stack.push(value.clone());
        }

        stack
    }
}

impl<T: PartialEq, R> PartialEq for GrowableStack<T, R> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, R> Eq for GrowableStack<T, R> {}

impl<T: Debug, R> Debug for GrowableStack<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableStack")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.buf.size())
            .finish()
    }
}

impl<T: Debug, R> Display for GrowableStack<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
