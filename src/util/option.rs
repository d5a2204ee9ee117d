use std::error::Error;
use std::hint;

use super::result::ResultExtension;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;

    fn or_throw<E: Error>(self, error: E) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps a value that the container's own bookkeeping guarantees is present, such as the
    /// link following a node when the stored length says there is one. Hitting None is an
    /// [`unreachable!`] panic in debug builds and undefined behavior in release builds.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees that None is impossible here.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Unwraps the value, panicking with the message of `error` if there isn't one. Used for
    /// checked arithmetic on lengths, where None means the collection can't grow any further.
    ///
    /// # Panics
    /// Panics if the [`Option`] is [`None`].
    #[track_caller]
    fn or_throw<E: Error>(self, error: E) -> T {
        self.ok_or(error).throw()
    }
}
