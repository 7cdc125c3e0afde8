//! Static graph elements: weighted undirected edges.
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::graph::ids::{EdgeId, VertexId};

pub type Weight = f64;

/// An undirected weighted edge between `a` and `b`.
///
/// The endpoint order only records how the edge was inserted; the edge is
/// symmetric for every algorithm in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId, weight: Weight) -> Self {
        Self { a, b, weight }
    }

    /// One endpoint, the one the edge was inserted from.
    pub fn either(&self) -> VertexId {
        self.a
    }

    /// The endpoint opposite `v`. For a self-loop this is `v` itself.
    pub fn other(&self, v: VertexId) -> VertexId {
        debug_assert!(v == self.a || v == self.b, "{v:?} is not an endpoint of {self:?}");
        if v == self.a { self.b } else { self.a }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// Ordering key shared by Kruskal's sort and Prim's heap.
///
/// Weights compare under IEEE total order after folding `-0.0` into `0.0` and
/// clearing the sign of NaN, so NaN sorts last. Equal weights fall back to the
/// edge's insertion index, so every run on the same graph sees the same order.
#[derive(Debug, Clone, Copy)]
pub struct EdgeKey {
    pub weight: Weight,
    pub id: EdgeId,
}

impl EdgeKey {
    pub fn new(id: EdgeId, edge: &Edge) -> Self {
        Self {
            weight: edge.weight,
            id,
        }
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeKey {}

impl PartialOrd for EdgeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn canonical(weight: Weight) -> Weight {
    if weight == 0.0 {
        0.0
    } else if weight.is_nan() {
        weight.abs()
    } else {
        weight
    }
}

impl Ord for EdgeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.weight)
            .total_cmp(&canonical(other.weight))
            .then_with(|| self.id.cmp(&other.id))
    }
}
