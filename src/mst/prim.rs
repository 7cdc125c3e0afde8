//! Lazy Prim's algorithm over a binary min-heap of frontier edges.
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{EdgeKey, Graph, IndexVec, VertexId};
use crate::metrics::Metrics;
use crate::mst::{MstResult, spanning_tree_size};

struct Frontier<'g> {
    graph: &'g Graph,
    visited: IndexVec<VertexId, bool>,
    heap: BinaryHeap<Reverse<EdgeKey>>,
}

impl<'g> Frontier<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: IndexVec::from_elem_n(false, graph.vertex_count()),
            heap: BinaryHeap::with_capacity(graph.edge_count()),
        }
    }

    /// Marks `v` and queues every incident edge leading to an unvisited vertex.
    fn visit(&mut self, v: VertexId, metrics: &mut Metrics) {
        let graph = self.graph;
        self.visited[v] = true;
        for (id, edge) in graph.adjacent(v) {
            if !self.visited[edge.other(v)] {
                self.heap.push(Reverse(EdgeKey::new(id, edge)));
                metrics.incr_edge_pushes();
            }
        }
    }

    fn pop(&mut self, metrics: &mut Metrics) -> Option<EdgeKey> {
        let Reverse(key) = self.heap.pop()?;
        metrics.incr_pq_op();
        Some(key)
    }
}

/// Minimum spanning tree (or forest) of `graph` by Prim's algorithm.
///
/// Trees are grown from each still-unvisited vertex in index order. Queue
/// entries whose endpoints are both visited are dropped when popped. The run
/// stops outright once `V - 1` edges are accepted.
pub fn prim(graph: &Graph, metrics: &mut Metrics) -> MstResult {
    let target = spanning_tree_size(graph);
    let mut frontier = Frontier::new(graph);
    let mut result = MstResult::with_capacity(target);
    let mut components = 0usize;

    'roots: for root in graph.vertices() {
        if frontier.visited[root] {
            continue;
        }
        components += 1;
        frontier.visit(root, metrics);
        while let Some(key) = frontier.pop(metrics) {
            let edge = graph[key.id];
            let (a, b) = (edge.a, edge.b);
            if frontier.visited[a] && frontier.visited[b] {
                continue;
            }
            result.accept(key.id, edge);
            if !frontier.visited[a] {
                frontier.visit(a, metrics);
            }
            if !frontier.visited[b] {
                frontier.visit(b, metrics);
            }
            if result.len() == target {
                break 'roots;
            }
        }
    }

    log::debug!(
        "prim: accepted {} edges over {} component(s), cost {}, {} pushes, {} pops",
        result.len(),
        components,
        result.total_cost,
        metrics.edge_pushes(),
        metrics.pq_ops()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    fn sample() -> Graph {
        let mut graph = Graph::new(["A", "B", "C", "D"]).unwrap();
        graph.add_edge("A", "B", 5.0).unwrap();
        graph.add_edge("A", "C", 2.0).unwrap();
        graph.add_edge("B", "C", 8.0).unwrap();
        graph.add_edge("B", "D", 3.0).unwrap();
        graph.add_edge("C", "D", 4.0).unwrap();
        graph
    }

    #[test]
    fn grows_from_vertex_zero() {
        let graph = sample();
        let mut metrics = Metrics::new();
        let result = prim(&graph, &mut metrics);
        let ids: Vec<_> = result.edge_ids().collect();
        // A-C, then C-D, then D-B
        assert_eq!(ids, vec![EdgeId::new(1), EdgeId::new(4), EdgeId::new(3)]);
        assert_eq!(result.total_cost, 9.0);
        assert_eq!(metrics.uf_finds(), 0);
        assert_eq!(metrics.edges_considered(), 0);
    }

    #[test]
    fn counts_pushes_and_pops() {
        let graph = sample();
        let mut metrics = Metrics::new();
        prim(&graph, &mut metrics);
        // visit A: A-B, A-C; visit C: B-C, C-D; visit D: B-D
        assert_eq!(metrics.edge_pushes(), 5);
        // pops: A-C, C-D, B-D
        assert_eq!(metrics.pq_ops(), 3);
    }

    #[test]
    fn ties_resolve_by_insertion_order() {
        let mut graph = Graph::new(["A", "B", "C"]).unwrap();
        graph.add_edge("A", "C", 1.0).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();

        let mut metrics = Metrics::new();
        let result = prim(&graph, &mut metrics);
        let ids: Vec<_> = result.edge_ids().collect();
        // A-C and A-B are queued together; B-C joins after C is visited
        assert_eq!(ids, vec![EdgeId::new(0), EdgeId::new(1)]);
        assert_eq!(result.total_cost, 2.0);
    }

    #[test]
    fn stale_entries_are_discarded() {
        let mut graph = Graph::new(["A", "B", "C"]).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("A", "C", 5.0).unwrap();
        graph.add_edge("B", "C", 2.0).unwrap();
        graph.add_edge("A", "B", 0.5).unwrap();

        let mut metrics = Metrics::new();
        let result = prim(&graph, &mut metrics);
        let ids: Vec<_> = result.edge_ids().collect();
        assert_eq!(ids, vec![EdgeId::new(3), EdgeId::new(2)]);
        assert_eq!(result.total_cost, 2.5);
        // A-B:1 is popped stale before B-C
        assert_eq!(metrics.pq_ops(), 3);
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let mut graph = Graph::new(["A", "B", "C", "D"]).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("C", "D", 2.0).unwrap();

        let mut metrics = Metrics::new();
        let result = prim(&graph, &mut metrics);
        assert_eq!(result.len(), 2);
        assert_eq!(result.total_cost, 3.0);
        assert!(!result.is_spanning_tree(&graph));
    }

    #[test]
    fn isolated_vertices_start_empty_components() {
        let mut graph = Graph::new(["A", "B", "C", "D", "E"]).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();
        graph.add_edge("D", "E", 1.0).unwrap();
        graph.add_edge("C", "E", 7.0).unwrap();

        let mut metrics = Metrics::new();
        let result = prim(&graph, &mut metrics);
        assert_eq!(result.len(), 3);
        assert_eq!(result.total_cost, 9.0);
    }

    #[test]
    fn self_loops_are_never_queued() {
        let mut graph = Graph::new(["A", "B"]).unwrap();
        graph.add_edge("A", "A", -1.0).unwrap();
        graph.add_edge("A", "B", 3.0).unwrap();

        let mut metrics = Metrics::new();
        let result = prim(&graph, &mut metrics);
        assert_eq!(result.edge_ids().collect::<Vec<_>>(), vec![EdgeId::new(1)]);
        assert_eq!(metrics.edge_pushes(), 1);
    }

    #[test]
    fn degenerate_graphs_are_empty() {
        for labels in [vec![], vec!["solo"]] {
            let graph = Graph::new(labels).unwrap();
            let mut metrics = Metrics::new();
            let result = prim(&graph, &mut metrics);
            assert!(result.is_empty());
            assert_eq!(result.total_cost, 0.0);
        }
    }
}
