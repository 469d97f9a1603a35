//! Containers which restrict access to a single discipline.
//!
//! - [`Stack`] wraps a [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList) and only
//!   ever touches index 0, making it last in, first out.
//! - [`RingQueue`] is first in, first out with a capacity that is fixed at creation. All of its
//!   slots are allocated up front and reused as the read and write positions wrap around.

pub mod queue;
pub mod stack;

#[doc(inline)]
pub use queue::RingQueue;
#[doc(inline)]
pub use stack::Stack;
