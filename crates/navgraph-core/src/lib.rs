//! # `navgraph` Core
//!
//! Approximate nearest-neighbor search over Hierarchical Navigable Small
//! World (HNSW) graphs.
//!
//! The index is a multi-layer proximity graph: every point lives on layer 0,
//! and exponentially fewer points are promoted to each higher layer. Queries
//! descend from the sparse top layer to the dense bottom layer with a bounded
//! best-first (beam) search, so the cost grows sub-linearly with the number
//! of indexed points.
//!
//! ## Features
//!
//! - **Pluggable metric**: any [`DistanceEngine`], including closures
//! - **Deterministic**: seedable level sampling, reproducible graph shape
//! - **Arena storage**: nodes addressed by stable [`NodeId`]
//! - **Shared access**: [`SharedHnsw`] with an explicit reader/writer policy
//! - **Layered config**: `navgraph.toml` + `NAVGRAPH_*` environment
//!
//! ## Quick Start
//!
//! ```rust
//! use navgraph_core::{CpuDistance, DistanceMetric, HnswIndex, HnswParams};
//!
//! let params = HnswParams::new(1000);
//! let mut index = HnswIndex::new(params, CpuDistance::new(DistanceMetric::Euclidean))?;
//!
//! index.insert(vec![1.0_f32, 2.0, 3.0])?;
//! index.insert(vec![4.0_f32, 5.0, 6.0])?;
//!
//! let results = index.search_knn(&vec![3.0_f32, 4.0, 5.0], 1)?;
//! assert_eq!(results[0].0, 1);
//! # Ok::<(), navgraph_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod distance;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod index;

pub use config::{ConfigError, LoggingConfig, NavGraphConfig};
pub use distance::{CpuDistance, Dimensioned, DistanceEngine, DistanceMetric};
pub use error::{Error, Result};
pub use index::{
    CapacityPolicy, EntryStrategy, GraphStats, HnswIndex, HnswParams, LevelSampler, LevelScale,
    NeighborPolicy, NodeId, SharedHnsw,
};
