#![cfg(test)]

use super::*;
#[cfg(feature = "adapters")]
use crate::collections::adapters::RingQueue;
use crate::collections::linked::SinglyLinkedList;

fn sample_graph() -> ListGraph {
    let mut graph = ListGraph::new(6);
    for (src, dest) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (5, 0)] {
        assert!(graph.add_edge(src, dest));
    }
    graph
}

#[cfg(feature = "adapters")]
/// Visits every vertex reachable from `start`, in breadth-first order.
fn breadth_first(graph: &ListGraph, start: usize) -> Vec<usize> {
    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut queue = RingQueue::with_capacity(graph.node_count());

    visited[start] = true;
    assert!(queue.enqueue(start).is_ok());
    while let Some(node) = queue.dequeue() {
        order.push(node);
        for &next in graph.neighbours(node).into_iter().flatten() {
            if !visited[next] {
                visited[next] = true;
                assert!(queue.enqueue(next).is_ok(), "Each vertex is queued at most once.");
            }
        }
    }
    order
}

#[test]
fn test_add_and_query_edges() {
    let graph = sample_graph();
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 6);

    assert!(graph.has_edge(0, 2));
    assert!(!graph.has_edge(2, 0), "Edges should be directed.");
    assert_eq!(
        graph.neighbours(0).map(|list| list.to_string()).as_deref(),
        Some("1 2"),
        "Neighbours should keep the order edges were added in."
    );
    assert_eq!(graph.neighbours(4).map(SinglyLinkedList::len), Some(0));
}

#[test]
fn test_out_of_range_vertices() {
    let mut graph = sample_graph();
    assert!(!graph.add_edge(6, 0), "A source out of range should be ignored.");
    assert!(!graph.add_edge(0, 99), "A destination out of range should be ignored.");
    assert!(!graph.has_edge(0, 99));
    assert!(!graph.remove_edge(99, 0));
    assert!(graph.neighbours(6).is_none());
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_remove_edge() {
    let mut graph = sample_graph();
    assert!(graph.add_edge(0, 1));
    assert_eq!(graph.neighbours(0).map(|list| list.to_string()).as_deref(), Some("1 2 1"));

    assert!(graph.remove_edge(0, 1));
    assert_eq!(
        graph.neighbours(0).map(|list| list.to_string()).as_deref(),
        Some("2 1"),
        "Only the first matching edge should be removed."
    );
    assert!(graph.has_edge(0, 1));
    assert!(graph.remove_edge(0, 1));
    assert!(!graph.remove_edge(0, 1));
    assert_eq!(graph.edge_count(), 5);
}

#[test]
#[cfg(feature = "adapters")]
fn test_breadth_first_traversal() {
    let graph = sample_graph();
    assert_eq!(breadth_first(&graph, 0), [0, 1, 2, 3, 4]);
    assert_eq!(breadth_first(&graph, 5), [5, 0, 1, 2, 3, 4]);
    assert_eq!(breadth_first(&graph, 4), [4]);
}

#[test]
fn test_format() {
    let mut graph = ListGraph::new(3);
    graph.add_edge(0, 2);
    graph.add_edge(0, 1);
    graph.add_edge(2, 2);
    assert_eq!(graph.to_string(), "0: 2 1\n1:\n2: 2\n");
    assert_eq!(format!("{graph:?}"), "{0: [2, 1], 1: [], 2: [2]}");

    let empty = ListGraph::new(0);
    assert_eq!(empty.edge_count(), 0);
    assert_eq!(empty.to_string(), "");
}
