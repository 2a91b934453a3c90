//! HNSW graph structure and k-nearest-neighbor queries.
//!
//! Implements the hierarchical navigable small world graph described in
//! Malkov & Yashunin. Construction lives in `insert`, the single-layer beam
//! search in `search`.

use super::candidate::Candidate;
use super::level::LevelSampler;
use super::node::{Node, NodeId, NodeStore};
use super::params::HnswParams;
use crate::distance::{Dimensioned, DistanceEngine};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

/// HNSW index over points of type `T`.
///
/// # Type Parameters
///
/// * `T` - Point type, e.g. `Vec<f32>`
/// * `D` - Distance engine
/// * `R` - Random source of the level sampler
///
/// Insertion takes `&mut self` and queries take `&self`; wrap the index in
/// [`SharedHnsw`](super::SharedHnsw) to share it between threads.
#[derive(Debug, Clone)]
pub struct HnswIndex<T, D, R = StdRng> {
    /// Distance computation engine
    pub(super) distance: D,
    /// Node arena, indexed by `NodeId`
    pub(super) nodes: NodeStore<T>,
    /// Global entry point: the first node, present on every layer
    pub(super) entry_point: Option<NodeId>,
    /// Dimensionality fixed by the first inserted point
    pub(super) dimension: Option<usize>,
    /// Top layer, `floor(log2(capacity))`
    pub(super) max_layer: usize,
    pub(super) sampler: LevelSampler<R>,
    pub(super) params: HnswParams,
}

impl<T, D> HnswIndex<T, D, StdRng>
where
    T: Dimensioned,
    D: DistanceEngine<T>,
{
    /// Creates an empty index whose level sampler is `StdRng` seeded with
    /// `params.seed`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the parameters are invalid.
    pub fn new(params: HnswParams, distance: D) -> Result<Self> {
        let rng = <StdRng as rand::SeedableRng>::seed_from_u64(params.seed);
        Self::with_rng(params, distance, rng)
    }
}

impl<T, D, R> HnswIndex<T, D, R>
where
    T: Dimensioned,
    D: DistanceEngine<T>,
    R: Rng,
{
    /// Creates an empty index drawing levels from a caller-supplied source.
    ///
    /// `params.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the parameters are invalid.
    pub fn with_rng(params: HnswParams, distance: D, rng: R) -> Result<Self> {
        params.validate()?;

        let max_layer = params.max_layer();
        let sampler = LevelSampler::new(rng, params.level_multiplier(), max_layer);

        debug!(
            capacity = params.capacity,
            m = params.m,
            m_max = params.m_max,
            ef_construction = params.ef_construction,
            max_layer,
            "created HNSW index"
        );

        Ok(Self {
            distance,
            nodes: NodeStore::with_capacity(params.capacity),
            entry_point: None,
            dimension: None,
            max_layer,
            sampler,
            params,
        })
    }
}

impl<T, D, R> HnswIndex<T, D, R>
where
    T: Dimensioned,
    D: DistanceEngine<T>,
{
    /// Returns the number of points in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the index holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dimensionality of the indexed points, once the first one is inserted.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Node every search starts from.
    #[must_use]
    pub fn entry_point(&self) -> Option<NodeId> {
        self.entry_point
    }

    /// Highest layer of the graph.
    #[must_use]
    pub fn max_layer(&self) -> usize {
        self.max_layer
    }

    /// Parameters the index was built with.
    #[must_use]
    pub fn params(&self) -> &HnswParams {
        &self.params
    }

    /// Point stored under `id`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| node.data())
    }

    /// Node stored under `id`, with its adjacency lists.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    /// Highest layer `id` lives on.
    #[must_use]
    pub fn level_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.get(id).map(|node| node.level())
    }

    /// Neighbors of `id` on `layer`. Empty for unknown nodes and for layers
    /// above the node's level.
    #[must_use]
    pub fn neighbors(&self, id: NodeId, layer: usize) -> &[NodeId] {
        self.nodes.neighbors(id, layer)
    }

    /// Iterates over `(id, point)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.nodes.iter().enumerate().map(|(id, node)| (id, node.data()))
    }

    /// Distance between two points under this index's engine.
    #[inline]
    #[must_use]
    pub fn compute_distance(&self, a: &T, b: &T) -> f32 {
        self.distance.distance(a, b)
    }

    /// Searches for the `k` nearest neighbors of `query`.
    ///
    /// The layer-0 beam width is `params.ef_search`, or `k` when unset.
    ///
    /// # Returns
    ///
    /// Up to `k` `(node_id, distance)` pairs sorted by ascending distance,
    /// ties broken by insertion order. Empty when the index is empty or
    /// `k == 0`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if `query` does not match the
    /// indexed dimensionality.
    pub fn search_knn(&self, query: &T, k: usize) -> Result<Vec<(NodeId, f32)>> {
        let ef = self.params.ef_search.unwrap_or(k);
        self.search_knn_with_ef(query, k, ef)
    }

    /// Searches for the `k` nearest neighbors with an explicit layer-0 beam
    /// width. `ef` below `k` is raised to `k`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if `query` does not match the
    /// indexed dimensionality.
    pub fn search_knn_with_ef(&self, query: &T, k: usize, ef: usize) -> Result<Vec<(NodeId, f32)>> {
        let Some(entry) = self.entry_point else {
            return Ok(Vec::new());
        };
        self.check_dimension(query)?;
        if k == 0 {
            return Ok(Vec::new());
        }

        // Greedy descent: one best node per layer down to layer 1
        let mut current = entry;
        for layer in (1..=self.max_layer).rev() {
            current = self
                .search_layer(query, current, 1, layer)
                .first()
                .map_or(current, |best| best.id);
        }

        let mut found = self.search_layer(query, current, ef.max(k), 0);
        found.truncate(k);

        trace!(k, ef, returned = found.len(), "knn query");
        Ok(found.into_iter().map(|c| (c.id, c.distance)).collect())
    }

    /// Exhaustive k-nearest-neighbor search over every stored point.
    ///
    /// Same ordering as [`search_knn`](Self::search_knn); useful as a recall
    /// oracle and for tiny indexes.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if `query` does not match the
    /// indexed dimensionality.
    pub fn brute_force_knn(&self, query: &T, k: usize) -> Result<Vec<(NodeId, f32)>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.check_dimension(query)?;

        let mut all: Vec<Candidate> = self
            .iter()
            .map(|(id, point)| Candidate::new(id, self.distance.distance(query, point)))
            .collect();
        all.sort_unstable();
        all.truncate(k);

        Ok(all.into_iter().map(|c| (c.id, c.distance)).collect())
    }

    /// Checks a point against the indexed dimensionality.
    pub(super) fn check_dimension(&self, point: &T) -> Result<()> {
        let actual = point.dimension();
        match self.dimension {
            Some(expected) if expected != actual => {
                Err(Error::DimensionMismatch { expected, actual })
            }
            None if actual == 0 => Err(Error::InvalidVector(
                "vector has zero dimensions".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
