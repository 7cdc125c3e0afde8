//! # Weighted undirected graphs
//!
//! Vertices are a fixed, labelled set `0..V`; edges live in a single arena and
//! adjacency lists refer to them by [`EdgeId`]. Algorithms only ever borrow a
//! [`Graph`] immutably.
//!
//! ```rust
//! use mstbench::graph::*;
//!
//! let mut graph = Graph::new(["A", "B", "C"]).unwrap();
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 2.0).unwrap();
//!
//! let b = graph.index_of("B").unwrap();
//! assert_eq!(graph.adjacent(b).count(), 2);
//! assert_eq!(graph.label_of(b), Some("B"));
//! ```

pub mod core;
pub mod ids;
pub mod index_vec;
pub mod structure;

pub use self::core::{Graph, GraphError};
pub use ids::{EdgeId, VertexId};
pub use index_vec::{Idx, IndexVec};
pub use structure::{Edge, EdgeKey, Weight};
