use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::Slots;
use crate::collections::linked::SinglyLinkedList;
use crate::util::error::{InsertError, ReserveError};
use crate::util::result::InsertResultExtension;

/// A directed graph with a fixed number of vertices, numbered `0..node_count`. Each vertex owns a
/// [`SinglyLinkedList`] of the vertices its outgoing edges lead to, in the order the edges were
/// added.
///
/// Operations that name a vertex outside of `0..node_count` do nothing: they return `false` or
/// [`None`] rather than panicking.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `d`: The out-degree of the source vertex.
/// - `v`: The number of vertices.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_edge` | `O(d)` |
/// | `has_edge` | `O(d)` |
/// | `remove_edge` | `O(d)` |
/// | `neighbours` | `O(1)` |
/// | `edge_count` | `O(v)` |
pub struct ListGraph {
    pub(crate) neighbours: Slots<SinglyLinkedList<usize>>,
}

impl ListGraph {
    /// Creates a graph with `nodes` vertices and no edges.
    ///
    /// If allocation fails, the process is aborted.
    ///
    /// # Panics
    /// Panics if the adjacency lists would need more than [`isize::MAX`] bytes.
    pub fn new(nodes: usize) -> ListGraph {
        match ListGraph::try_new(nodes) {
            Ok(graph) => graph,
            Err(error) => error.raise(),
        }
    }

    pub fn try_new(nodes: usize) -> Result<ListGraph, ReserveError> {
        Ok(ListGraph {
            neighbours: Slots::try_repeat_with(nodes, SinglyLinkedList::new)?,
        })
    }

    /// Returns the number of vertices, which is fixed at creation.
    pub const fn node_count(&self) -> usize {
        self.neighbours.size()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(SinglyLinkedList::len).sum()
    }

    pub const fn contains_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Adds an edge from `src` to `dest`, appending `dest` to the neighbours of `src`. Returns
    /// false without changing anything if either vertex is out of range.
    ///
    /// Edges aren't deduplicated, adding the same edge twice stores it twice.
    pub fn add_edge(&mut self, src: usize, dest: usize) -> bool {
        self.try_add_edge(src, dest).or_raise()
    }

    pub fn try_add_edge(&mut self, src: usize, dest: usize) -> Result<bool, InsertError<usize>> {
        if !self.contains_node(src) || !self.contains_node(dest) {
            return Ok(false);
        }

        let list = &mut self.neighbours[src];
        list.try_insert(list.len(), dest)?;
        Ok(true)
    }

    /// Returns true if there is an edge from `src` to `dest`.
    pub fn has_edge(&self, src: usize, dest: usize) -> bool {
        self.contains_node(dest)
            && self
                .neighbours(src)
                .is_some_and(|list| list.contains(&dest))
    }

    /// Removes the first edge from `src` to `dest`, returning true if there was one.
    pub fn remove_edge(&mut self, src: usize, dest: usize) -> bool {
        if !self.contains_node(src) || !self.contains_node(dest) {
            return false;
        }

        let list = &mut self.neighbours[src];
        match list.index_of(&dest) {
            Some(position) => list.remove(position).is_some(),
            None => false,
        }
    }

    /// Returns the vertices that `node` has edges to, or None if `node` is out of range.
    pub fn neighbours(&self, node: usize) -> Option<&SinglyLinkedList<usize>> {
        self.neighbours.get(node)
    }
}

impl Debug for ListGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.neighbours.iter().enumerate())
            .finish()
    }
}

/// Formats one line per vertex, as the vertex followed by its neighbours.
impl Display for ListGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (node, list) in self.neighbours.iter().enumerate() {
            if list.is_empty() {
                writeln!(f, "{node}:")?;
            } else {
                writeln!(f, "{node}: {list}")?;
            }
        }
        Ok(())
    }
}
