//! Single-layer beam search, shared by insertion and queries.

use super::candidate::Candidate;
use super::graph::HnswIndex;
use super::node::NodeId;
use crate::distance::DistanceEngine;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

impl<T, D, R> HnswIndex<T, D, R>
where
    D: DistanceEngine<T>,
{
    /// Beam search of one layer starting from `entry`.
    ///
    /// Keeps a min-heap frontier of unexpanded candidates and a max-heap of
    /// the `ef` best nodes seen so far. Expansion stops once the closest
    /// unexpanded candidate is farther than the worst retained result while
    /// the result set is full: nothing reachable through it can improve the
    /// set.
    ///
    /// Returns at most `ef` candidates sorted by ascending distance. `ef` is
    /// clamped to `1..=len()`. An entry with no neighbors on `layer` yields
    /// just the entry itself.
    pub(crate) fn search_layer(
        &self,
        query: &T,
        entry: NodeId,
        ef: usize,
        layer: usize,
    ) -> Vec<Candidate> {
        // A beam wider than the graph cannot hold more nodes
        let ef = ef.clamp(1, self.nodes.len().max(1));

        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut frontier: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
        let mut results: BinaryHeap<Candidate> = BinaryHeap::with_capacity(ef + 1);

        let start = Candidate::new(entry, self.distance.distance(query, self.nodes.data(entry)));
        visited.insert(entry);
        frontier.push(Reverse(start));
        results.push(start);

        while let Some(Reverse(current)) = frontier.pop() {
            let worst = results.peek().map_or(f32::INFINITY, |c| c.distance);
            if results.len() >= ef && current.distance > worst {
                break;
            }

            for &neighbor in self.nodes.neighbors(current.id, layer) {
                if !visited.insert(neighbor) {
                    continue;
                }

                let candidate = Candidate::new(
                    neighbor,
                    self.distance.distance(query, self.nodes.data(neighbor)),
                );
                let admit =
                    results.len() < ef || results.peek().is_some_and(|worst| candidate < *worst);

                if admit {
                    frontier.push(Reverse(candidate));
                    results.push(candidate);
                    if results.len() > ef {
                        results.pop();
                    }
                }
            }
        }

        results.into_sorted_vec()
    }
}
