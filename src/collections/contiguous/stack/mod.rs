//! A module containing [`GrowableStack`], its bulk-copying [`FastGrowableStack`] variant and the
//! [`Relocate`] strategies that separate them.
//!
//! [`IntoIter`] provides owned iteration. Borrowed iteration goes through the stack's
//! [`Deref<Target = [T]>`](std::ops::Deref) implementation.

mod growable_stack;
mod iter;
mod relocate;
mod tests;

pub use growable_stack::*;
pub use iter::*;
pub use relocate::*;
