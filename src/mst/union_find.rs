//! Disjoint-set forest with path compression and union by rank.
use thiserror::Error;

use crate::graph::ids::VertexId;
use crate::graph::index_vec::IndexVec;
use crate::metrics::Metrics;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnionFindError {
    #[error("invalid argument: union-find size must be non-negative, got {0}")]
    InvalidArgument(i64),
}

/// Partition of `0..n` into disjoint sets.
///
/// Every [`find`](Self::find) and [`union`](Self::union) call is counted on
/// the [`Metrics`] passed in by the caller.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: IndexVec<VertexId, VertexId>,
    rank: IndexVec<VertexId, u32>,
    sets: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: IndexVec::from_fn_n(|id| id, n),
            rank: IndexVec::from_elem_n(0, n),
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of `x`'s set.
    ///
    /// Climbs to the root, then points every node on the path directly at it.
    ///
    /// # Panics
    /// If `x` is not in `0..len()`.
    pub fn find(&mut self, x: VertexId, metrics: &mut Metrics) -> VertexId {
        metrics.incr_uf_find();
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`, returning `false` when they were
    /// already one set. Counted as a union either way.
    ///
    /// On equal ranks the root of `x` stays the root.
    pub fn union(&mut self, x: VertexId, y: VertexId, metrics: &mut Metrics) -> bool {
        metrics.incr_uf_union();
        let rx = self.find(x, metrics);
        let ry = self.find(y, metrics);
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, x: VertexId, y: VertexId, metrics: &mut Metrics) -> bool {
        self.find(x, metrics) == self.find(y, metrics)
    }
}

impl TryFrom<i64> for UnionFind {
    type Error = UnionFindError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        usize::try_from(n)
            .map(Self::new)
            .map_err(|_| UnionFindError::InvalidArgument(n))
    }
}
