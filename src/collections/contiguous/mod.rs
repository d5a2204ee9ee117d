//! Array-backed collection types. [`RawBuffer`] is the fixed-capacity storage that
//! [`GrowableStack`] (and [`CircularQueue`](crate::collections::circ::CircularQueue)) are built
//! on, resizing according to the shared policy in [`capacity`].

pub mod buffer;
pub mod capacity;
pub mod stack;

#[doc(inline)]
pub use buffer::RawBuffer;
#[doc(inline)]
pub use stack::{FastGrowableStack, GrowableStack};
