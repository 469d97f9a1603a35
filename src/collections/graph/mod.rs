//! Graphs stored as adjacency lists.

mod list_graph;
mod tests;

pub use list_graph::*;
