//! Graph shape statistics.

use super::graph::HnswIndex;
use crate::distance::{Dimensioned, DistanceEngine};
use serde::{Deserialize, Serialize};

/// Snapshot of the graph's shape. Index `l` of every vector is layer `l`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub nodes: usize,
    /// Highest layer of the graph.
    pub max_layer: usize,
    /// Nodes living on each layer.
    pub nodes_per_layer: Vec<usize>,
    /// Directed edges on each layer (a bidirectional link counts twice).
    pub edges_per_layer: Vec<usize>,
    /// Largest adjacency list on each layer.
    pub max_degree_per_layer: Vec<usize>,
}

impl GraphStats {
    /// Mean out-degree of the nodes living on `layer`.
    #[must_use]
    pub fn mean_degree(&self, layer: usize) -> f64 {
        match (self.nodes_per_layer.get(layer), self.edges_per_layer.get(layer)) {
            (Some(&nodes), Some(&edges)) if nodes > 0 => edges as f64 / nodes as f64,
            _ => 0.0,
        }
    }
}

impl<T, D, R> HnswIndex<T, D, R>
where
    T: Dimensioned,
    D: DistanceEngine<T>,
{
    /// Computes per-layer node, edge and degree counts.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let layers = self.max_layer + 1;
        let mut stats = GraphStats {
            nodes: self.len(),
            max_layer: self.max_layer,
            nodes_per_layer: vec![0; layers],
            edges_per_layer: vec![0; layers],
            max_degree_per_layer: vec![0; layers],
        };

        for node in self.nodes.iter() {
            for (layer, links) in node.layers.iter().enumerate() {
                stats.nodes_per_layer[layer] += 1;
                stats.edges_per_layer[layer] += links.len();
                stats.max_degree_per_layer[layer] = stats.max_degree_per_layer[layer].max(links.len());
            }
        }

        stats
    }
}
