//! A module containing [`ChainedHashTable`] and its iterators.

mod chained_hash_table;
mod iter;
mod tests;

pub use chained_hash_table::*;
pub use iter::*;
