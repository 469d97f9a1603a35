//! Generic node-chain containers and the adapters built on top of them.
//!
//! # Purpose
//! This crate collects the containers that a course on data structures keeps reimplementing:
//! singly, doubly and circular linked lists, a stack, a bounded queue, a chained hashtable and an
//! adjacency-list graph. Each one owns its elements outright and releases every node exactly once.
//!
//! # Index Clamping
//! All positional operations on the linked lists clamp their index instead of reporting it as out
//! of range. Inserting at an index past the end appends, while getting or removing past the end
//! operates on the last element. This is intentional and part of the tested behaviour:
//!
//! ```
//! # use linked_containers::collections::linked::SinglyLinkedList;
//! let mut list = SinglyLinkedList::new();
//! list.insert(0, 5);
//! list.insert(0, 3);
//! list.insert(5, 9);
//! assert_eq!(list.remove(1), Some(5));
//! assert_eq!(list.to_string(), "3 9");
//! ```
//!
//! The only defined failure points are empty containers, which return [`None`], and allocation
//! failure.
//!
//! # Error Handling
//! Every method that allocates has a `try_` counterpart returning a [`Result`]. The errors are
//! strongly typed structs which implement [`Error`](std::error::Error), combined into enums for
//! static dispatch. The infallible methods abort the process through
//! [`handle_alloc_error`](std::alloc::handle_alloc_error) when allocation fails, and panic when a
//! length would overflow.
//!
//! # Features
//! - `linked`: [`SinglyLinkedList`](collections::linked::SinglyLinkedList),
//!   [`DoublyLinkedList`](collections::linked::DoublyLinkedList) and
//!   [`CircularList`](collections::linked::CircularList).
//! - `adapters`: [`Stack`](collections::adapters::Stack) and
//!   [`RingQueue`](collections::adapters::RingQueue).
//! - `hash`: [`ChainedHashTable`](collections::hash::ChainedHashTable).
//! - `graph`: [`ListGraph`](collections::graph::ListGraph).
//! - `problems`: small algorithms which consume the containers.
//!
//! All of them are enabled by default.
#![cfg_attr(docsrs, feature(doc_cfg))]

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
#[cfg_attr(docsrs, doc(cfg(feature = "collections")))]
pub mod collections;
#[cfg(feature = "problems")]
#[cfg_attr(docsrs, doc(cfg(feature = "problems")))]
pub mod problems;

pub(crate) mod util;

pub use util::error;
