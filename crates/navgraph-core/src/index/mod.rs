//! HNSW (Hierarchical Navigable Small World) index.
//!
//! # Module Organization
//!
//! - `node`: arena of points and their per-layer adjacency lists
//! - `level`: seedable level sampler
//! - `search`: single-layer beam search
//! - `insert`: graph construction
//! - `graph`: the index type and k-NN queries
//! - `shared`: reader/writer locked wrapper
//! - `params`: parameters and construction policies
//!
//! # References
//!
//! - Paper: "Efficient and robust approximate nearest neighbor search
//!   using Hierarchical Navigable Small World graphs" (Malkov & Yashunin, 2016)
//! - arXiv: <https://arxiv.org/abs/1603.09320>

mod candidate;
mod graph;
mod insert;
mod level;
mod node;
mod params;
mod search;
mod shared;
mod stats;

pub use graph::HnswIndex;
pub use level::LevelSampler;
pub use node::{Node, NodeId};
pub use params::{
    CapacityPolicy, EntryStrategy, HnswParams, LevelScale, NeighborPolicy, DEFAULT_EF_CONSTRUCTION,
    DEFAULT_M, DEFAULT_SEED,
};
pub use shared::SharedHnsw;
pub use stats::GraphStats;

#[cfg(test)]
mod candidate_tests;
#[cfg(test)]
mod node_tests;
