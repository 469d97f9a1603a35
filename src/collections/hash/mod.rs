//! Hash-based containers.
//!
//! [`ChainedHashTable`] resolves collisions by chaining: each bucket is a
//! [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList) of entries, so colliding
//! keys never displace each other and the bucket count never changes.

pub mod chained;

#[doc(inline)]
pub use chained::ChainedHashTable;
