//! Benchmark report documents, one entry per input graph.
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Weight};
use crate::metrics::Metrics;
use crate::mst::MstResult;

/// `{"results": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub results: Vec<GraphReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphReport {
    pub graph_id: u32,
    pub input_stats: InputStats,
    pub prim: AlgorithmReport,
    pub kruskal: AlgorithmReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

impl InputStats {
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub mst_edges: Vec<EdgeRecord>,
    pub total_cost: Weight,
    pub operations_count: IndexMap<String, u64>,
    pub execution_time_ms: u64,
}

impl AlgorithmReport {
    /// Maps the result's vertex ids back to `graph`'s labels.
    pub fn new(graph: &Graph, result: &MstResult, metrics: &Metrics) -> Self {
        let label = |v| graph.label_of(v).unwrap_or_default().to_owned();
        let mst_edges = result
            .edges
            .iter()
            .map(|accepted| {
                let (a, b) = accepted.endpoints();
                EdgeRecord {
                    from: label(a),
                    to: label(b),
                    weight: accepted.weight(),
                }
            })
            .collect();
        let operations_count = metrics
            .to_snapshot()
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect();
        Self {
            mst_edges,
            total_cost: result.total_cost,
            operations_count,
            execution_time_ms: metrics.elapsed_ms(),
        }
    }
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "graph {}: {} vertices, {} edges",
            self.graph_id, self.input_stats.vertices, self.input_stats.edges
        )?;
        for (name, report) in [("prim", &self.prim), ("kruskal", &self.kruskal)] {
            writeln!(
                f,
                "  {name:<8} cost {:>12.3}  edges {:>6}  time {:>5} ms",
                report.total_cost,
                report.mst_edges.len(),
                report.execution_time_ms
            )?;
            let counters: Vec<String> = report
                .operations_count
                .iter()
                .filter(|(key, _)| key.as_str() != "execution_time_ms")
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            writeln!(f, "           {}", counters.join(" "))?;
        }
        Ok(())
    }
}
