//! A small set of primitive collections, written from raw allocations up.
//!
//! # Purpose
//! Each type here exists to show how the data structure itself works: a fixed
//! [`RawBuffer`](collections::contiguous::RawBuffer) over a single allocation, a
//! [`GrowableStack`](collections::contiguous::GrowableStack) that grows and shrinks over it, a
//! [`CircularQueue`](collections::circ::CircularQueue) that wraps around it, a singly linked
//! [`LinkedList`](collections::linked::LinkedList) and a
//! [`BinaryTree`](collections::binary_tree::BinaryTree) with several ways of walking it.
//!
//! # Error Handling
//! It is more ergonomic for collections to panic in some cases, because users don't want to be
//! forced to handle an error every time they push a value. So every method with a precondition
//! panics with the message of a typed error, and has a `try_` counterpart which returns that error
//! in a [`Result`] instead.
//!
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate uses `std` for allocation, but doesn't use [`Vec`] or any of the std collections to
//! write its own. It depends on `derive_more` for the error types, because derive macros remove
//! the need for some very repetitive programming.
//!
//! # Features
//! Each collection module sits behind a feature of the same name (`contiguous`, `circ`, `linked`
//! and `binary-tree`). All of them are enabled by default through `collections-all`.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
