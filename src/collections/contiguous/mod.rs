//! Fixed-size heap storage.
//!
//! [`Slots`] is the only type here. It backs the containers that allocate everything up front,
//! namely the [`RingQueue`](crate::collections::adapters::RingQueue) and the bucket array of the
//! [`ChainedHashTable`](crate::collections::hash::ChainedHashTable).

mod slots;

#[doc(inline)]
pub use slots::Slots;
