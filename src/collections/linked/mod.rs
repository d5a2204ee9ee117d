//! Linked collection types. Currently this is just the singly linked [`LinkedList`], which
//! supports both queue and stack access in `O(1)`.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
