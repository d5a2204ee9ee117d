use std::ptr;

/// The strategy an array-backed collection uses to carry its values over into a freshly allocated
/// [`RawBuffer`](crate::collections::contiguous::RawBuffer) when it resizes.
///
/// The strategy is a type parameter rather than a runtime choice: whether values can be relocated
/// with a single bulk copy is a property of the element type, so it is decided at compile time.
/// Both strategies leave the destination in exactly the same observable state.
///
/// # Safety
/// Collections treat the first `count` slots of `dst` as initialized once
/// [`relocate`](Relocate::relocate) returns, and hand them out through safe methods. An
/// implementation must therefore move exactly `count` values from `src` into `dst`, in order,
/// without dropping or duplicating any of them. Implementing the trait outside this crate requires
/// an `unsafe impl` to make that promise:
///
/// ```compile_fail
/// # use primitive_collections::collections::contiguous::stack::Relocate;
/// struct SkipRelocate;
///
/// impl<T> Relocate<T> for SkipRelocate {
///     unsafe fn relocate(_src: *const T, _dst: *mut T, _count: usize) {}
/// }
/// ```
pub unsafe trait Relocate<T> {
    /// Relocates `count` initialized values from `src` to `dst`, preserving their order. After the
    /// call, the values at `src` are logically uninitialized and must not be read or dropped.
    ///
    /// # Safety
    /// - `src` must be valid for reads of `count` initialized values of `T`.
    /// - `dst` must be valid for writes of `count` values of `T`.
    /// - Both pointers must be properly aligned and the two ranges must not overlap.
    unsafe fn relocate(src: *const T, dst: *mut T, count: usize);
}

/// Relocates values one element at a time. Works for every element type, including those which
/// own heap memory or have non-trivial destructors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveRelocate;

// SAFETY: Every one of the count values is read from src and written to dst exactly once.
unsafe impl<T> Relocate<T> for MoveRelocate {
    unsafe fn relocate(src: *const T, dst: *mut T, count: usize) {
        for i in 0..count {
            // SAFETY: i < count, so both offsets are within the ranges that the caller guarantees
            // are valid. Each source value is read exactly once, moving it out.
            unsafe { dst.add(i).write(src.add(i).read()); }
        }
    }
}

/// Relocates all values with one bulk memory copy. Only available for [`Copy`] types, where a
/// bitwise copy is exactly equivalent to copying each value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyRelocate;

// SAFETY: A bitwise copy of count Copy values initializes exactly count slots of dst.
unsafe impl<T: Copy> Relocate<T> for CopyRelocate {
    unsafe fn relocate(src: *const T, dst: *mut T, count: usize) {
        // SAFETY: The caller guarantees that both ranges are valid, aligned and don't overlap.
        unsafe { ptr::copy_nonoverlapping(src, dst, count); }
    }
}
