//! Container types. The linked lists form the core, everything else is built from them.
//!
//! # Purpose
//! Each list owns a chain of heap-allocated nodes and each node owns exactly one element. The
//! adapters restrict the lists to a stack or queue discipline, while the hashtable and graph use
//! one list per bucket or vertex.

#[cfg(feature = "adapters")]
#[cfg_attr(docsrs, doc(cfg(feature = "adapters")))]
pub mod adapters;
pub mod contiguous;
#[cfg(feature = "graph")]
#[cfg_attr(docsrs, doc(cfg(feature = "graph")))]
pub mod graph;
#[cfg(feature = "hash")]
#[cfg_attr(docsrs, doc(cfg(feature = "hash")))]
pub mod hash;
#[cfg(feature = "linked")]
#[cfg_attr(docsrs, doc(cfg(feature = "linked")))]
pub mod linked;
