//! A module containing [`RawBuffer`], the fixed-capacity storage shared by the array-backed
//! collections.

mod raw_buffer;
mod tests;

pub use raw_buffer::*;
