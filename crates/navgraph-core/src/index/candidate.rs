//! Totally ordered search candidates for the beam search heaps.
//!
//! Distances are compared with `f32::total_cmp`, so NaN cannot corrupt a
//! `BinaryHeap`. Equal distances fall back to the node id, which makes the
//! order of results independent of heap internals: ties resolve in
//! insertion order.

use super::node::NodeId;
use std::cmp::Ordering;

/// A node paired with its distance to the query.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) distance: f32,
    pub(crate) id: NodeId,
}

impl Candidate {
    pub(crate) const fn new(id: NodeId, distance: f32) -> Self {
        Self { distance, id }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.id.cmp(&other.id))
    }
}
