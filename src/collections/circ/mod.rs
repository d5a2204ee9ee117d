//! Circular collection types, which wrap logical positions around a fixed block of storage instead
//! of shifting values.

pub mod queue;

#[doc(inline)]
pub use queue::CircularQueue;
