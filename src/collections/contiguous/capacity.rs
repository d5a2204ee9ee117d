//! The amortized growth and shrink policy shared by the array-backed collections.
//!
//! Collections grow when they are completely full and shrink once no more than a third of their
//! capacity is occupied. Both directions compute the new capacity as `len + len / 2`, so a
//! collection that has just grown or shrunk is never immediately due for the opposite resize.

use std::cmp;

use crate::util::error::CapacityOverflow;

/// The capacity used by `new` constructors.
pub const DEFAULT_CAP: usize = 4;
/// No resize will produce a capacity smaller than this, so small collections always have room to
/// grow by at least one element.
pub const MIN_CAP: usize = 4;
/// A collection shrinks when its capacity is at least this many times its length.
pub const SHRINK_FACTOR: usize = 3;

/// The capacity to resize to for a collection currently holding `len` values.
pub(crate) fn resized_cap(len: usize) -> Result<usize, CapacityOverflow> {
    len.checked_add(len / 2)
        .map(|cap| cmp::max(cap, MIN_CAP))
        .ok_or(CapacityOverflow)
}

/// Returns the smaller capacity a collection should shrink to, if its occupancy has dropped far
/// enough to warrant one.
pub(crate) fn shrunk_cap(cap: usize, len: usize) -> Option<usize> {
    if cap < len.saturating_mul(SHRINK_FACTOR) {
        return None;
    }

    // len <= cap / 3, so this can't overflow.
    let new_cap = cmp::max(len + len / 2, MIN_CAP);
    (new_cap < cap).then_some(new_cap)
}
