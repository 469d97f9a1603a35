//! A module containing [`CircularList`] and its iterators.

mod circular_list;
mod iter;
mod node;
mod tests;

pub use circular_list::*;
pub use iter::*;
pub(crate) use node::*;
