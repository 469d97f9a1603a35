//! A module containing [`DoublyLinkedList`], its iterators and [`CursorMut`].

mod cursor;
mod doubly_linked_list;
mod iter;
mod node;

pub use cursor::*;
pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use node::*;
