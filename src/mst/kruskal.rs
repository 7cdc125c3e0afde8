//! Kruskal's algorithm: global weight order plus union-find.
use crate::graph::{EdgeKey, Graph};
use crate::metrics::Metrics;
use crate::mst::union_find::UnionFind;
use crate::mst::{MstResult, spanning_tree_size};

/// Minimum spanning tree (or forest) of `graph` by Kruskal's algorithm.
///
/// Edges are scanned in ascending [`EdgeKey`] order. Each scanned edge counts
/// as considered; the scan ends once `V - 1` edges are accepted or the edges
/// run out.
pub fn kruskal(graph: &Graph, metrics: &mut Metrics) -> MstResult {
    let target = spanning_tree_size(graph);
    let mut edges = graph.edges_snapshot();
    edges.sort_unstable_by_key(|(id, edge)| EdgeKey::new(*id, edge));

    let mut uf = UnionFind::new(graph.vertex_count());
    let mut result = MstResult::with_capacity(target);

    for (id, edge) in edges {
        if result.len() == target {
            break;
        }
        metrics.incr_edges_considered();
        let (a, b) = (edge.either(), edge.other(edge.either()));
        if uf.find(a, metrics) != uf.find(b, metrics) {
            uf.union(a, b, metrics);
            result.accept(id, edge);
        }
    }

    log::debug!(
        "kruskal: accepted {}/{} edges, cost {}, considered {}",
        result.len(),
        graph.edge_count(),
        result.total_cost,
        metrics.edges_considered()
    );
    result
}
