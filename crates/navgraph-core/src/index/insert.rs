//! HNSW insertion.
//!
//! Samples a level for the new point, descends from the top layer to layer
//! 0, and on every layer the point lives on links it to the nearest nodes
//! found by a beam search of width `ef_construction`.

use super::candidate::Candidate;
use super::graph::HnswIndex;
use super::node::{Node, NodeId};
use super::params::{CapacityPolicy, EntryStrategy, NeighborPolicy};
use crate::distance::{Dimensioned, DistanceEngine};
use crate::error::{Error, Result};
use rand::Rng;
use tracing::{trace, warn};

impl<T, D, R> HnswIndex<T, D, R>
where
    T: Dimensioned,
    D: DistanceEngine<T>,
    R: Rng,
{
    /// Inserts a point into the index.
    ///
    /// The first point becomes the entry point and lives on every layer.
    /// Every later point is linked, on each layer up to its sampled level,
    /// to the nearest `M` (`M_max` on layer 0) nodes found by a beam search
    /// of width `ef_construction`, with edges added in both directions.
    ///
    /// # Returns
    ///
    /// The node ID assigned to this point.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidVector` for a zero-dimensional first point
    /// - `Error::DimensionMismatch` if the point does not match the index
    /// - `Error::CapacityExceeded` when full under `CapacityPolicy::Reject`
    pub fn insert(&mut self, point: T) -> Result<NodeId> {
        self.check_dimension(&point)?;
        self.reserve_slot()?;

        let Some(entry) = self.entry_point else {
            self.dimension = Some(point.dimension());
            let node_id = self.nodes.push(Node::new(point, self.max_layer));
            self.entry_point = Some(node_id);
            trace!(node_id, level = self.max_layer, "inserted entry point");
            return Ok(node_id);
        };

        let level = self.sampler.sample().min(self.max_layer);
        let node_id = self.nodes.push(Node::new(point, level));

        let mut current = entry;
        for layer in (0..=self.max_layer).rev() {
            if layer > level {
                current = self.next_entry(node_id, current, layer, None);
                continue;
            }

            let mut found = self.search_layer(
                self.nodes.data(node_id),
                current,
                self.params.ef_construction,
                layer,
            );
            found.retain(|c| c.id != node_id);
            found.truncate(self.params.max_links(layer));

            self.connect(node_id, &found, layer);
            current = self.next_entry(node_id, current, layer, found.first());
        }

        trace!(node_id, level, "inserted point");
        Ok(node_id)
    }

    /// Applies the capacity policy before a new node is pushed.
    fn reserve_slot(&mut self) -> Result<()> {
        let capacity = self.params.capacity;
        if self.nodes.len() < capacity {
            return Ok(());
        }

        match self.params.capacity_policy {
            CapacityPolicy::Reject => {
                warn!(capacity, "index is full, rejecting insertion");
                Err(Error::CapacityExceeded { capacity })
            }
            CapacityPolicy::Grow => {
                if self.nodes.len() == self.nodes.capacity() {
                    warn!(
                        len = self.nodes.len(),
                        capacity, "growing index past its configured capacity"
                    );
                    self.nodes.reserve(capacity);
                }
                Ok(())
            }
        }
    }

    /// Picks the entry node for the layer below `layer`.
    ///
    /// `closest` is the best node found on `layer`, when a search ran there.
    /// The node being inserted is never returned.
    fn next_entry(
        &self,
        node_id: NodeId,
        current: NodeId,
        layer: usize,
        closest: Option<&Candidate>,
    ) -> NodeId {
        match self.params.entry_strategy {
            EntryStrategy::FirstNeighbor => self
                .nodes
                .neighbors(current, layer)
                .iter()
                .copied()
                .find(|&n| n != node_id)
                .unwrap_or(current),
            EntryStrategy::Closest => match closest {
                Some(best) => best.id,
                None => self
                    .search_layer(self.nodes.data(node_id), current, 1, layer)
                    .first()
                    .map_or(current, |best| best.id),
            },
        }
    }

    /// Links `node_id` to `selected` on `layer` in both directions.
    fn connect(&mut self, node_id: NodeId, selected: &[Candidate], layer: usize) {
        if let Some(links) = self.nodes.links_mut(node_id, layer) {
            links.extend(selected.iter().map(|c| c.id));
        }

        for neighbor in selected {
            self.add_back_edge(neighbor.id, node_id, layer);
        }
    }

    /// Adds `new_node` to `neighbor`'s list, re-pruning it under
    /// `NeighborPolicy::KeepClosest`.
    fn add_back_edge(&mut self, neighbor: NodeId, new_node: NodeId, layer: usize) {
        let max_links = self.params.max_links(layer);

        let Some(links) = self.nodes.links_mut(neighbor, layer) else {
            return;
        };
        links.push(new_node);

        if self.params.neighbor_policy == NeighborPolicy::Unbounded || links.len() <= max_links {
            return;
        }

        let base = self.nodes.data(neighbor);
        let mut ranked: Vec<Candidate> = self
            .nodes
            .neighbors(neighbor, layer)
            .iter()
            .map(|&n| Candidate::new(n, self.distance.distance(base, self.nodes.data(n))))
            .collect();
        ranked.sort_unstable();
        ranked.truncate(max_links);

        if let Some(links) = self.nodes.links_mut(neighbor, layer) {
            links.clear();
            links.extend(ranked.iter().map(|c| c.id));
        }
    }
}
