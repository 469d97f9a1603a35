use super::error::InsertError;

pub(crate) trait InsertResultExtension<T> {
    /// Unwraps the result of a `try_` insertion, aborting on allocation failure and panicking on
    /// length overflow. The infallible insertion methods are all written in terms of this.
    ///
    /// # Panics
    /// Panics if the insertion overflowed the length of the container.
    fn or_raise(self) -> T;
}

impl<T, V> InsertResultExtension<T> for Result<T, InsertError<V>> {
    fn or_raise(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => error.raise(),
        }
    }
}
