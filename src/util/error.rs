//! Error types shared by every container in the crate.
//!
//! Positional operations never fail: indices are clamped, and operations on empty containers
//! return [`None`]. The errors here cover the remaining failure points, which are allocation,
//! length overflow and the fixed capacity of a [`RingQueue`](crate::collections::adapters::RingQueue).

use std::alloc::{self, Layout};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The global allocator was unable to provide memory for a node or a slot buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    /// The layout of the allocation that was refused.
    pub layout: Layout,
}

impl AllocError {
    /// Reports the failure through [`alloc::handle_alloc_error`], which terminates the process.
    /// This is the default behaviour of every non-`try_` method in the crate.
    pub fn abort(self) -> ! {
        alloc::handle_alloc_error(self.layout)
    }
}

impl Display for AllocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to allocate {} bytes with alignment {}!",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl Error for AllocError {}

/// A length or buffer size would have exceeded what can be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The reason that memory for a container couldn't be reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ReserveError {
    /// The allocator refused the request.
    Alloc(AllocError),
    /// The request was too large to describe.
    Capacity(CapacityOverflow),
}

impl ReserveError {
    /// Escalates the error: allocation failures abort the process, overflows panic.
    ///
    /// # Panics
    /// Panics if the error is a [`CapacityOverflow`].
    pub fn raise(self) -> ! {
        match self {
            ReserveError::Alloc(error) => error.abort(),
            ReserveError::Capacity(error) => panic!("{}", error),
        }
    }
}

/// A failed insertion. The rejected value is handed back to the caller and the container is left
/// unchanged.
pub struct InsertError<T> {
    /// The value that wasn't inserted.
    pub value: T,
    /// Why the insertion failed.
    pub cause: ReserveError,
}

impl<T> InsertError<T> {
    pub(crate) fn new(value: T, cause: impl Into<ReserveError>) -> InsertError<T> {
        InsertError {
            value,
            cause: cause.into(),
        }
    }

    /// Returns the value that couldn't be inserted.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Drops the rejected value and escalates the cause, see [`ReserveError::raise`].
    ///
    /// # Panics
    /// Panics if the cause is a [`CapacityOverflow`].
    pub fn raise(self) -> ! {
        self.cause.raise()
    }
}

impl<T> Debug for InsertError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

impl<T> Display for InsertError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Insertion rejected: {}", self.cause)
    }
}

impl<T> Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// Returned by [`RingQueue::enqueue`](crate::collections::adapters::RingQueue::enqueue) when every
/// slot is occupied. Contains the rejected value.
pub struct QueueFull<T>(pub T);

impl<T> QueueFull<T> {
    /// Returns the value that couldn't be enqueued.
    pub fn into_value(self) -> T {
        self.0
    }
}

impl<T> Debug for QueueFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QueueFull").finish_non_exhaustive()
    }
}

impl<T> Display for QueueFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to enqueue into a queue with no free slots!")
    }
}

impl<T> Error for QueueFull<T> {}

/// A hashtable was requested with zero buckets, so no key could be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoBuckets;

impl Display for NoBuckets {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to calculate bucket indices for a hashtable with 0 buckets!")
    }
}

impl Error for NoBuckets {}

/// The reason a [`ChainedHashTable`](crate::collections::hash::ChainedHashTable) couldn't be
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum TableError {
    /// The bucket count was zero.
    NoBuckets(NoBuckets),
    /// The bucket array couldn't be allocated.
    Reserve(ReserveError),
}

impl TableError {
    /// Escalates the error: allocation failures abort the process, anything else panics.
    ///
    /// # Panics
    /// Panics unless the error is an allocation failure.
    pub fn raise(self) -> ! {
        match self {
            TableError::Reserve(error) => error.raise(),
            TableError::NoBuckets(error) => panic!("{}", error),
        }
    }
}
