//! The collection types of this crate, each behind a feature of the same name.
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut) over their
//! initialized values, which saves writing some of the more repetitive functionality. Types that
//! can't be viewed as one slice provide their own borrowed iterators instead.
//!
//! Every operation with a precondition comes in two forms: one that panics when the precondition
//! is violated and a `try_` form that returns the error instead.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, EmptyCollection, IndexOrCapOverflow, IndexOutOfBounds,
};
