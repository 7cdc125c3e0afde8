//! # Minimum spanning trees and forests
//!
//! [`kruskal`] and [`prim`] both return an [`MstResult`] holding the accepted
//! edges in acceptance order. On a graph with `C` connected components the
//! result is a spanning forest of `V - C` edges; callers detect disconnection
//! with [`MstResult::is_spanning_tree`].
//!
//! ```rust
//! use mstbench::graph::Graph;
//! use mstbench::metrics::Metrics;
//! use mstbench::mst::{kruskal, prim};
//!
//! let mut graph = Graph::new(["A", "B", "C"]).unwrap();
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 2.0).unwrap();
//! graph.add_edge("A", "C", 3.0).unwrap();
//!
//! let mut metrics = Metrics::new();
//! let tree = kruskal(&graph, &mut metrics);
//! assert_eq!(tree.total_cost, 3.0);
//!
//! let mut metrics = Metrics::new();
//! assert_eq!(prim(&graph, &mut metrics).total_cost, 3.0);
//! ```

use serde::Serialize;

use crate::graph::{Edge, EdgeId, Graph, VertexId, Weight};
use crate::metrics::Metrics;

pub mod kruskal;
pub mod prim;
pub mod union_find;

pub use kruskal::kruskal;
pub use prim::prim;
pub use union_find::{UnionFind, UnionFindError};

/// Which algorithm produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    pub fn run(self, graph: &Graph, metrics: &mut Metrics) -> MstResult {
        match self {
            Algorithm::Prim => prim(graph, metrics),
            Algorithm::Kruskal => kruskal(graph, metrics),
        }
    }
}

/// An accepted edge together with the id it has in the source graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MstEdge {
    pub id: EdgeId,
    pub edge: Edge,
}

impl MstEdge {
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.edge.a, self.edge.b)
    }

    pub fn weight(&self) -> Weight {
        self.edge.weight
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MstResult {
    /// Accepted edges, in the order the algorithm accepted them.
    pub edges: Vec<MstEdge>,
    pub total_cost: Weight,
}

impl MstResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            total_cost: 0.0,
        }
    }

    pub(crate) fn accept(&mut self, id: EdgeId, edge: Edge) {
        self.total_cost += edge.weight;
        self.edges.push(MstEdge { id, edge });
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the result spans all of `graph`, i.e. holds `V - 1` edges.
    /// The empty graph counts as spanned.
    pub fn is_spanning_tree(&self, graph: &Graph) -> bool {
        self.len() == spanning_tree_size(graph)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|e| e.id)
    }
}

/// Edge count of a spanning tree over `graph`.
pub(crate) fn spanning_tree_size(graph: &Graph) -> usize {
    graph.vertex_count().saturating_sub(1)
}
