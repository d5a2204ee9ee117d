use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

/// A fixed-capacity, exclusively owned block of contiguous storage. This is the leaf that every
/// array-backed collection in this crate is built on.
///
/// The capacity of a RawBuffer never changes after construction. Growing or shrinking a collection
/// means allocating a new RawBuffer and relocating values into it.
///
/// RawBuffer is move-only: it doesn't implement [`Clone`], so exactly one owner is ever responsible
/// for freeing the allocation. [`RawBuffer::take`] moves the storage out from behind a mutable
/// reference, leaving an empty buffer with capacity 0 behind.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The capacity of the RawBuffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `new` | `O(n)` |
/// | `new_uninit` | `O(1)` |
/// | `get_unchecked` | `O(1)` |
/// | `size` | `O(1)` |
/// | `take` | `O(1)` |
pub struct RawBuffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Returns the capacity of the RawBuffer, which is the number of slots it holds.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::RawBuffer;
    /// let buf: RawBuffer<u8> = RawBuffer::new(3);
    /// assert_eq!(buf.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a RawBuffer with capacity 0. No memory is allocated.
    pub const fn empty() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new RawBuffer of [`MaybeUninit<T>`] with the provided capacity. All slots are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::RawBuffer;
    /// # use std::mem::MaybeUninit;
    /// let buf: RawBuffer<MaybeUninit<u8>> = RawBuffer::new_uninit(5);
    /// assert_eq!(buf.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> RawBuffer<MaybeUninit<T>> {
        let layout = RawBuffer::<MaybeUninit<T>>::make_layout(size);
        let ptr = RawBuffer::<MaybeUninit<T>>::make_ptr(layout);

        RawBuffer {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Moves the storage out of self, leaving an empty RawBuffer with capacity 0 in its place.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::RawBuffer;
    /// let mut buf: RawBuffer<u8> = RawBuffer::new(4);
    /// let moved = buf.take();
    /// assert_eq!(moved.size(), 4);
    /// assert_eq!(buf.size(), 0);
    /// ```
    pub const fn take(&mut self) -> RawBuffer<T> {
        mem::replace(self, RawBuffer::empty())
    }

    /// Returns a reference to the slot at `index` without checking bounds.
    ///
    /// # Safety
    /// `index` must be less than [`RawBuffer::size`].
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index is in bounds, so the pointer is within the
        // allocation and points to an initialized value.
        unsafe { self.ptr.add(index).as_ref() }
    }

    /// Returns a mutable reference to the slot at `index` without checking bounds.
    ///
    /// # Safety
    /// `index` must be less than [`RawBuffer::size`].
    pub const unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index is in bounds, so the pointer is within the
        // allocation and points to an initialized value. self is borrowed mutably for the lifetime
        // of the returned reference.
        unsafe { self.ptr.add(index).as_mut() }
    }

    pub(crate) const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const()
    }

    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> RawBuffer<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> RawBuffer<T> {
    /// Creates a new RawBuffer with `size` slots, each holding the default value of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::RawBuffer;
    /// let buf: RawBuffer<u8> = RawBuffer::new(3);
    /// assert_eq!(&*buf, &[0, 0, 0]);
    /// ```
    pub fn new(size: usize) -> RawBuffer<T> {
        let buf = Self::new_uninit(size);

        for i in 0..size {
            // SAFETY: size > isize::MAX / size_of::<T>() is already guarded against and all
            // possible values are within the allocated range of the RawBuffer.
            unsafe {
                buf.ptr.add(i).write(MaybeUninit::new(T::default()))
            }
        }

        // SAFETY: All slots are initialized with the default value for T.
        unsafe { buf.assume_init() }
    }
}

impl<T> RawBuffer<MaybeUninit<T>> {
    /// Assume that all slots of a `RawBuffer<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every slot is properly initialized. Failing to do
    /// so is undefined behavior.
    pub unsafe fn assume_init(self) -> RawBuffer<T> {
        let (ptr, size) = (self.ptr, self.size);
        // The allocation is handed over to the new RawBuffer, so self must not free it.
        mem::forget(self);

        RawBuffer {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let layout = RawBuffer::<T>::make_layout(self.size);

        // SAFETY: All slots of a RawBuffer<T> are initialized and ready to drop. Collections that
        // track partial initialization hold a RawBuffer<MaybeUninit<T>>, for which this is a no-op.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for RawBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for RawBuffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. The mutable borrow of self prevents aliasing.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

// SAFETY: RawBuffers, when used safely rely on unique pointers and are therefore safe for Send when
// T: Send.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: RawBuffer's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that RawBuffer<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T: Debug> Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
