//! Seeded random connected graphs for benchmarking.
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{CategoryConfig, GeneratorConfig};
use crate::io::{EdgeSpec, GraphDocument, GraphSpec};

pub struct GraphGenerator {
    rng: StdRng,
    weight_min: u32,
    weight_max: u32,
}

impl GraphGenerator {
    pub fn new(seed: u64, weight_min: u32, weight_max: u32) -> Self {
        debug_assert!(weight_min <= weight_max);
        Self {
            rng: StdRng::seed_from_u64(seed),
            weight_min,
            weight_max,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.seed, config.weight_min, config.weight_max)
    }

    /// Every category in order, ids counting up from 1.
    pub fn generate_document(&mut self, categories: &[CategoryConfig]) -> GraphDocument {
        let mut graphs = Vec::new();
        let mut next_id = 1;
        for category in categories {
            for _ in 0..category.count {
                let vertices = self.vertex_count(category.min_vertices, category.max_vertices);
                let target = target_edges(vertices, category.density);
                let spec = self.connected_graph(next_id, vertices, target);
                log::info!(
                    "generated graph id={} category={} V={} edges={}",
                    spec.id,
                    category.name,
                    vertices,
                    spec.edges.len()
                );
                graphs.push(spec);
                next_id += 1;
            }
        }
        GraphDocument { graphs }
    }

    fn vertex_count(&mut self, lo: usize, hi: usize) -> usize {
        if lo >= hi {
            lo
        } else {
            self.rng.random_range(lo..=hi)
        }
    }

    fn weight(&mut self) -> u32 {
        self.rng.random_range(self.weight_min..=self.weight_max)
    }

    /// A path `N1 - N2 - ... - NV` plus random extra edges, without self-loops
    /// or repeated pairs, until `target_edges` edges exist or the pair space is
    /// exhausted. Gives up after `10 * target` consecutive rejected draws.
    pub fn connected_graph(&mut self, id: u32, vertices: usize, target_edges: usize) -> GraphSpec {
        let nodes: Vec<String> = (1..=vertices).map(|i| format!("N{i}")).collect();
        let max_pairs = vertices * vertices.saturating_sub(1) / 2;
        let desired = target_edges.min(max_pairs);

        let mut used = HashSet::with_capacity(desired);
        let mut edges = Vec::with_capacity(desired.max(vertices.saturating_sub(1)));
        for b in 1..vertices {
            let a = b - 1;
            used.insert((a, b));
            let weight = self.weight();
            edges.push(edge_spec(&nodes, a, b, weight));
        }

        let mut attempts = 0;
        while edges.len() < desired && attempts < desired * 10 {
            let u = self.rng.random_range(0..vertices);
            let v = self.rng.random_range(0..vertices);
            let pair = (u.min(v), u.max(v));
            if u == v || !used.insert(pair) {
                attempts += 1;
                continue;
            }
            let weight = self.weight();
            edges.push(edge_spec(&nodes, pair.0, pair.1, weight));
            attempts = 0;
        }

        GraphSpec { id, nodes, edges }
    }
}

/// `max(V - 1, round(V * density))`.
pub fn target_edges(vertices: usize, density: f64) -> usize {
    let scaled = (vertices as f64 * density).round() as usize;
    scaled.max(vertices.saturating_sub(1))
}

fn edge_spec(nodes: &[String], a: usize, b: usize, weight: u32) -> EdgeSpec {
    EdgeSpec {
        from: nodes[a].clone(),
        to: nodes[b].clone(),
        weight: f64::from(weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphs_are_connected_and_simple() {
        let mut generator = GraphGenerator::new(42, 1, 100);
        let spec = generator.connected_graph(1, 40, 80);
        assert_eq!(spec.nodes.len(), 40);
        assert_eq!(spec.edges.len(), 80);

        let graph = spec.to_graph().unwrap();
        let mut pairs = HashSet::new();
        for (_, edge) in graph.edges() {
            assert!(!edge.is_self_loop());
            assert!((1.0..=100.0).contains(&edge.weight));
            assert!(pairs.insert((edge.a.min(edge.b), edge.a.max(edge.b))));
        }
        assert_eq!(petgraph::algo::connected_components(&graph.to_petgraph()), 1);
    }

    #[test]
    fn same_seed_same_document() {
        let categories = vec![CategoryConfig {
            name: "Tiny".into(),
            count: 3,
            min_vertices: 4,
            max_vertices: 9,
            density: 1.5,
        }];
        let first = GraphGenerator::new(9, 1, 10).generate_document(&categories);
        let second = GraphGenerator::new(9, 1, 10).generate_document(&categories);
        assert_eq!(first, second);
        let ids: Vec<_> = first.graphs.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn dense_targets_cap_at_complete_graph() {
        let mut generator = GraphGenerator::new(1, 1, 1);
        let spec = generator.connected_graph(1, 5, 1_000);
        assert!(spec.edges.len() >= 4 && spec.edges.len() <= 10);
        let pairs: HashSet<_> = spec.edges.iter().map(|e| (&e.from, &e.to)).collect();
        assert_eq!(pairs.len(), spec.edges.len());
    }

    #[test]
    fn target_never_drops_below_a_tree() {
        assert_eq!(target_edges(10, 0.0), 9);
        assert_eq!(target_edges(10, 2.0), 20);
        assert_eq!(target_edges(0, 2.0), 0);
        assert_eq!(target_edges(1, 1.0), 1);
    }
}
