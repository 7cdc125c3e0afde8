//! Runs both algorithms over every input graph and collects reports.
use std::time::Instant;

use rayon::prelude::*;

use crate::graph::{Graph, GraphError};
use crate::io::{GraphDocument, GraphSpec};
use crate::metrics::Metrics;
use crate::mst::{Algorithm, MstResult};
use crate::report::{AlgorithmReport, GraphReport, InputStats, ResultsDocument};

/// One timed algorithm run with its own metrics.
#[derive(Debug, Clone)]
pub struct TimedRun {
    pub result: MstResult,
    pub metrics: Metrics,
}

/// Runs `algorithm` on `graph` with fresh metrics and records its wall time.
pub fn run_timed(graph: &Graph, algorithm: Algorithm) -> TimedRun {
    let mut metrics = Metrics::new();
    let start = Instant::now();
    let result = algorithm.run(graph, &mut metrics);
    metrics.set_elapsed(start.elapsed());
    TimedRun { result, metrics }
}

/// Prim first, then Kruskal, as separate runs on the same graph.
pub fn benchmark_graph(id: u32, graph: &Graph) -> GraphReport {
    let prim = run_timed(graph, Algorithm::Prim);
    let kruskal = run_timed(graph, Algorithm::Kruskal);

    if (prim.result.total_cost - kruskal.result.total_cost).abs() > 1e-9 {
        log::warn!(
            "graph {}: prim cost {} differs from kruskal cost {}",
            id,
            prim.result.total_cost,
            kruskal.result.total_cost
        );
    }
    if !kruskal.result.is_spanning_tree(graph) {
        log::info!(
            "graph {} is disconnected: forest of {} edges over {} vertices",
            id,
            kruskal.result.len(),
            graph.vertex_count()
        );
    }

    GraphReport {
        graph_id: id,
        input_stats: InputStats::of(graph),
        prim: AlgorithmReport::new(graph, &prim.result, &prim.metrics),
        kruskal: AlgorithmReport::new(graph, &kruskal.result, &kruskal.metrics),
    }
}

fn benchmark_spec(spec: &GraphSpec) -> Result<GraphReport, GraphError> {
    let graph = spec.to_graph()?;
    log::debug!(
        "graph {}: {} vertices, {} edges",
        spec.id,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(benchmark_graph(spec.id, &graph))
}

/// Benchmarks every graph in `document`, in document order.
///
/// With `parallel` set, distinct graphs are processed on the rayon pool; the
/// two runs of a single graph always stay on one thread.
pub fn run_benchmark(
    document: &GraphDocument,
    parallel: bool,
) -> Result<ResultsDocument, GraphError> {
    let results = if parallel {
        document
            .graphs
            .par_iter()
            .map(benchmark_spec)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        document
            .graphs
            .iter()
            .map(benchmark_spec)
            .collect::<Result<Vec<_>, _>>()?
    };
    Ok(ResultsDocument { results })
}
