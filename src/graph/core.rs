//! Label registry, edge arena and adjacency lists.
use std::ops::Index;

use indexmap::IndexSet;
use petgraph::graph::{NodeIndex, UnGraph};
use thiserror::Error;

use crate::graph::ids::{EdgeId, VertexId};
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::{Edge, Weight};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown vertex label `{0}`")]
    UnknownLabel(String),
    #[error("vertex label `{0}` is listed more than once")]
    DuplicateLabel(String),
    #[error("vertex {vertex:?} is out of bounds for a graph with {len} vertices")]
    VertexOutOfBounds { vertex: VertexId, len: usize },
}

/// A weighted undirected multigraph over a fixed set of labelled vertices.
///
/// Vertices are fixed at construction; edges are appended afterwards and are
/// never removed. Adjacency lists hold [`EdgeId`]s into the single edge arena,
/// so each edge is stored exactly once.
///
/// Both vertices and edges are addressed by `u32` ids; growing either past
/// `u32::MAX` entries panics.
#[derive(Clone, Debug)]
pub struct Graph {
    labels: IndexSet<String>,
    edges: IndexVec<EdgeId, Edge>,
    adjacency: IndexVec<VertexId, Vec<EdgeId>>,
}

impl Graph {
    /// Builds the registry. Label `i` becomes `VertexId(i)`.
    pub fn new<I, S>(labels: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = IndexSet::new();
        for label in labels {
            let label = label.into();
            if registry.contains(&label) {
                return Err(GraphError::DuplicateLabel(label));
            }
            registry.insert(label);
        }
        let adjacency = IndexVec::from_elem_n(Vec::new(), registry.len());
        Ok(Self {
            labels: registry,
            edges: IndexVec::new(),
            adjacency,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn index_of(&self, label: &str) -> Result<VertexId, GraphError> {
        self.labels
            .get_index_of(label)
            .map(VertexId::from_usize)
            .ok_or_else(|| GraphError::UnknownLabel(label.to_owned()))
    }

    pub fn label_of(&self, vertex: VertexId) -> Option<&str> {
        self.labels.get_index(vertex.index()).map(String::as_str)
    }

    /// Appends an edge between two registered labels.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<EdgeId, GraphError> {
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        Ok(self.push_edge(Edge::new(a, b, weight)))
    }

    /// Appends an edge between two vertex indices.
    pub fn add_edge_by_index(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        for vertex in [a, b] {
            if !self.adjacency.contains_index(vertex) {
                return Err(GraphError::VertexOutOfBounds {
                    vertex,
                    len: self.vertex_count(),
                });
            }
        }
        Ok(self.push_edge(Edge::new(a, b, weight)))
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.edges.push(edge);
        // A self-loop lands in its vertex's list twice, once per endpoint.
        self.adjacency[edge.a].push(id);
        self.adjacency[edge.b].push(id);
        id
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = VertexId> + ExactSizeIterator + '_ {
        self.adjacency.indices()
    }

    /// Edges incident to `vertex`, in insertion order.
    ///
    /// # Panics
    /// If `vertex` does not belong to this graph.
    pub fn adjacent(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.adjacency[vertex]
            .iter()
            .map(move |&id| (id, &self.edges[id]))
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    pub fn edges(&self) -> impl DoubleEndedIterator<Item = (EdgeId, &Edge)> + ExactSizeIterator {
        self.edges.iter_enumerated()
    }

    /// Owned copy of every edge with its id, in insertion order.
    pub fn edges_snapshot(&self) -> Vec<(EdgeId, Edge)> {
        self.edges.iter_enumerated().map(|(id, edge)| (id, *edge)).collect()
    }

    /// Exports the graph as a petgraph undirected graph whose node `i` is
    /// vertex `i` and whose edge `j` is edge `j`.
    pub fn to_petgraph(&self) -> UnGraph<String, Weight> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        for label in &self.labels {
            graph.add_node(label.clone());
        }
        for edge in self.edges.iter() {
            graph.add_edge(
                NodeIndex::new(edge.a.index()),
                NodeIndex::new(edge.b.index()),
                edge.weight,
            );
        }
        graph
    }
}

impl Index<EdgeId> for Graph {
    type Output = Edge;

    fn index(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        let mut graph = Graph::new(["A", "B", "C", "D"]).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 2.0).unwrap();
        graph.add_edge("C", "D", 3.0).unwrap();
        graph.add_edge("D", "A", 4.0).unwrap();
        graph
    }

    #[test]
    fn labels_map_to_dense_indices() {
        let graph = square();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.index_of("C"), Ok(VertexId::new(2)));
        assert_eq!(graph.label_of(VertexId::new(3)), Some("D"));
        assert_eq!(graph.label_of(VertexId::new(4)), None);
        assert!(graph.has_label("A"));
        assert!(!graph.has_label("E"));
    }

    #[test]
    fn edges_appear_in_both_adjacency_lists() {
        let graph = square();
        assert_eq!(graph.edge_count(), 4);
        let a = graph.index_of("A").unwrap();
        let ids: Vec<EdgeId> = graph.adjacent(a).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![EdgeId::new(0), EdgeId::new(3)]);
        for vertex in graph.vertices() {
            for (id, edge) in graph.adjacent(vertex) {
                assert_eq!(graph.edge(id), Some(edge));
                assert!(edge.a == vertex || edge.b == vertex);
            }
        }
        let total: usize = graph.vertices().map(|v| graph.degree(v)).sum();
        assert_eq!(total, 2 * graph.edge_count());
    }

    #[test]
    fn unknown_label_is_rejected() {
        let mut graph = square();
        assert_eq!(
            graph.add_edge("A", "Z", 1.0),
            Err(GraphError::UnknownLabel("Z".to_owned()))
        );
        assert_eq!(graph.edge_count(), 4);
        assert!(matches!(graph.index_of("Q"), Err(GraphError::UnknownLabel(_))));
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let err = Graph::new(["A", "B", "A"]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateLabel("A".to_owned()));
    }

    #[test]
    fn parallel_edges_and_self_loops_are_kept() {
        let mut graph = Graph::new(["A", "B"]).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "A", 1.0).unwrap();
        graph.add_edge("A", "A", -2.0).unwrap();
        assert_eq!(graph.edge_count(), 3);
        let a = graph.index_of("A").unwrap();
        assert_eq!(graph.degree(a), 4);
    }

    #[test]
    fn index_edges_are_bounds_checked() {
        let mut graph = Graph::new(["A", "B"]).unwrap();
        let err = graph
            .add_edge_by_index(VertexId::new(0), VertexId::new(2), 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfBounds {
                vertex: VertexId::new(2),
                len: 2
            }
        );
        assert!(
            graph
                .add_edge_by_index(VertexId::new(1), VertexId::new(0), 1.0)
                .is_ok()
        );
    }

    #[test]
    fn petgraph_export_preserves_indices() {
        let graph = square();
        let exported = graph.to_petgraph();
        assert_eq!(exported.node_count(), 4);
        assert_eq!(exported.edge_count(), 4);
        assert_eq!(exported[NodeIndex::new(1)], "B");
    }
}
