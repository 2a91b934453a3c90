//! Thread-shareable HNSW index.
//!
//! # Locking policy
//!
//! One `parking_lot::RwLock` guards the whole graph. Insertions take the
//! write lock, so they are serialized and never observed half-done;
//! queries take the read lock and run in parallel with each other.

use super::graph::HnswIndex;
use super::node::NodeId;
use super::params::HnswParams;
use super::stats::GraphStats;
use crate::distance::{Dimensioned, DistanceEngine};
use crate::error::Result;
use parking_lot::{RwLock, RwLockReadGuard};
use rand::rngs::StdRng;
use rand::Rng;

/// An [`HnswIndex`] behind a reader/writer lock.
///
/// `Send + Sync` whenever the point, engine and random source are `Send`
/// (and the point and engine are `Sync`), so it can be shared through an
/// `Arc`.
#[derive(Debug)]
pub struct SharedHnsw<T, D, R = StdRng> {
    inner: RwLock<HnswIndex<T, D, R>>,
}

impl<T, D> SharedHnsw<T, D, StdRng>
where
    T: Dimensioned,
    D: DistanceEngine<T>,
{
    /// Creates an empty shared index. See [`HnswIndex::new`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the parameters are invalid.
    pub fn new(params: HnswParams, distance: D) -> Result<Self> {
        HnswIndex::new(params, distance).map(Self::from_index)
    }
}

impl<T, D, R> SharedHnsw<T, D, R>
where
    T: Dimensioned,
    D: DistanceEngine<T>,
{
    /// Wraps an existing index.
    #[must_use]
    pub fn from_index(index: HnswIndex<T, D, R>) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }

    /// Searches for the `k` nearest neighbors under the read lock.
    ///
    /// # Errors
    ///
    /// See [`HnswIndex::search_knn`].
    pub fn search_knn(&self, query: &T, k: usize) -> Result<Vec<(NodeId, f32)>> {
        self.inner.read().search_knn(query, k)
    }

    /// Searches with an explicit layer-0 beam width under the read lock.
    ///
    /// # Errors
    ///
    /// See [`HnswIndex::search_knn_with_ef`].
    pub fn search_knn_with_ef(&self, query: &T, k: usize, ef: usize) -> Result<Vec<(NodeId, f32)>> {
        self.inner.read().search_knn_with_ef(query, k, ef)
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the index holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Graph statistics under the read lock.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        self.inner.read().stats()
    }

    /// Holds the read lock for several operations in a row.
    pub fn read(&self) -> RwLockReadGuard<'_, HnswIndex<T, D, R>> {
        self.inner.read()
    }

    /// Unwraps the index.
    #[must_use]
    pub fn into_inner(self) -> HnswIndex<T, D, R> {
        self.inner.into_inner()
    }
}

impl<T, D, R> SharedHnsw<T, D, R>
where
    T: Dimensioned,
    D: DistanceEngine<T>,
    R: Rng,
{
    /// Inserts a point under the write lock.
    ///
    /// # Errors
    ///
    /// See [`HnswIndex::insert`].
    pub fn insert(&self, point: T) -> Result<NodeId> {
        self.inner.write().insert(point)
    }
}
