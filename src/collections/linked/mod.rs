//! Node-chain containers.
//!
//! Three distinct list types are provided rather than one configurable type, because their
//! traversal rules differ:
//! - [`SinglyLinkedList`] follows `next` links from the head until it runs out of nodes.
//! - [`DoublyLinkedList`] can be traversed from either end and supports `O(1)` removal through a
//!   [`CursorMut`].
//! - [`CircularList`] never runs out of nodes, so every traversal is bounded by its length.
//!
//! All three share the same index clamping policy for `insert`, `remove` and `get` (see the
//! [crate docs](crate)), except that [`CircularList::get`] wraps around instead.

pub mod circular;
pub mod doubly;
mod length;
pub mod singly;

#[doc(inline)]
pub use circular::CircularList;
#[doc(inline)]
pub use doubly::{CursorMut, DoublyLinkedList};
pub(crate) use length::*;
#[doc(inline)]
pub use singly::SinglyLinkedList;
