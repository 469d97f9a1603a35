//! A module containing [`RingQueue`] and its iterator.

mod iter;
mod ring_queue;

pub use iter::*;
pub use ring_queue::*;
