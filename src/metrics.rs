//! Per-run operation counters.
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Counters accumulated by exactly one algorithm run on one graph.
///
/// Callers create a fresh instance per run and pass it down by `&mut`;
/// nothing in this crate resets or shares one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    uf_finds: u64,
    uf_unions: u64,
    pq_ops: u64,
    edges_considered: u64,
    edge_pushes: u64,
    elapsed: Option<Duration>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incr_uf_find(&mut self) {
        self.uf_finds += 1;
    }

    pub fn incr_uf_union(&mut self) {
        self.uf_unions += 1;
    }

    pub fn incr_pq_op(&mut self) {
        self.pq_ops += 1;
    }

    pub fn incr_edges_considered(&mut self) {
        self.edges_considered += 1;
    }

    pub fn incr_edge_pushes(&mut self) {
        self.edge_pushes += 1;
    }

    /// Records the run's wall time. Only the first call takes effect.
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        match self.elapsed {
            Some(previous) => {
                log::warn!("elapsed time already recorded as {previous:?}, ignoring {elapsed:?}")
            }
            None => self.elapsed = Some(elapsed),
        }
    }

    pub fn uf_finds(&self) -> u64 {
        self.uf_finds
    }

    pub fn uf_unions(&self) -> u64 {
        self.uf_unions
    }

    pub fn pq_ops(&self) -> u64 {
        self.pq_ops
    }

    pub fn edges_considered(&self) -> u64 {
        self.edges_considered
    }

    pub fn edge_pushes(&self) -> u64 {
        self.edge_pushes
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Elapsed wall time in whole milliseconds, zero when not yet recorded.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    /// All six fields in reporting order.
    pub fn to_snapshot(&self) -> IndexMap<&'static str, u64> {
        IndexMap::from([
            ("uf_finds", self.uf_finds),
            ("uf_unions", self.uf_unions),
            ("pq_ops", self.pq_ops),
            ("edges_considered", self.edges_considered),
            ("edge_pushes", self.edge_pushes),
            ("execution_time_ms", self.elapsed_ms()),
        ])
    }
}
