use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Turns a failed precondition into a panic carrying the error's own message. Every panicking
    /// method in this crate is its `try_` counterpart followed by this call, so both forms fail
    /// with the same text.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
