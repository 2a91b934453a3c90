//! HNSW index parameters and construction policies.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default number of links per node on layers above 0.
pub const DEFAULT_M: usize = 16;
/// Default size of the candidate pool during construction.
pub const DEFAULT_EF_CONSTRUCTION: usize = 200;
/// Default seed of the level sampler.
pub const DEFAULT_SEED: u64 = 100;

/// Multiplier applied to `-ln(U)` when sampling a node's level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelScale {
    /// Multiply by `M`.
    ///
    /// Levels are large and most points saturate at `max_layer`, so every
    /// layer stays well populated.
    #[default]
    ConnectionCount,
    /// Multiply by `1 / ln(M)`, as in Malkov & Yashunin.
    ///
    /// Layer populations decay geometrically with ratio `1 / M`.
    Canonical,
    /// Multiply by a fixed value.
    Fixed(f64),
}

/// What happens to a neighbor's adjacency list when a back-edge is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborPolicy {
    /// Re-prune the neighbor's list to its `M` (`M_max` on layer 0) closest
    /// nodes whenever the back-edge overflows it.
    #[default]
    KeepClosest,
    /// Append without capping. Degrees grow without bound.
    Unbounded,
}

/// How insertion picks the entry node for the next lower layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStrategy {
    /// First adjacency entry of the current entry node on the current layer.
    #[default]
    FirstNeighbor,
    /// Closest node found on the current layer.
    Closest,
}

/// Behavior once the index holds `capacity` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Refuse further insertions with `Error::CapacityExceeded`.
    #[default]
    Reject,
    /// Keep inserting; capacity is only a reservation hint.
    Grow,
}

/// HNSW index parameters.
///
/// `max_layer` is not stored: it is derived from `capacity` as
/// `floor(log2(capacity))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HnswParams {
    /// Expected number of points. Storage is reserved up front.
    pub capacity: usize,
    /// Links kept per node on layers above 0 (M parameter).
    pub m: usize,
    /// Links kept per node on layer 0 (M_max parameter).
    pub m_max: usize,
    /// Size of the candidate pool during construction.
    pub ef_construction: usize,
    /// Layer-0 beam width for queries. `None` uses `k`.
    pub ef_search: Option<usize>,
    /// Seed of the level sampler.
    pub seed: u64,
    /// Level sampling multiplier.
    pub level_scale: LevelScale,
    /// Neighbor-side handling of back-edges.
    pub neighbor_policy: NeighborPolicy,
    /// Entry selection while descending during insertion.
    pub entry_strategy: EntryStrategy,
    /// Behavior at capacity.
    pub capacity_policy: CapacityPolicy,
}

impl Default for HnswParams {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl HnswParams {
    /// Creates parameters for the given capacity with default tuning
    /// (`M = M_max = 16`, `ef_construction = 200`).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            m: DEFAULT_M,
            m_max: DEFAULT_M,
            ef_construction: DEFAULT_EF_CONSTRUCTION,
            ef_search: None,
            seed: DEFAULT_SEED,
            level_scale: LevelScale::default(),
            neighbor_policy: NeighborPolicy::default(),
            entry_strategy: EntryStrategy::default(),
            capacity_policy: CapacityPolicy::default(),
        }
    }

    /// Sets `M`, and `M_max` to the same value.
    #[must_use]
    pub fn with_m(mut self, m: usize) -> Self {
        self.m = m;
        self.m_max = m;
        self
    }

    /// Sets `M_max` (layer 0 only).
    #[must_use]
    pub fn with_m_max(mut self, m_max: usize) -> Self {
        self.m_max = m_max;
        self
    }

    /// Sets `ef_construction`.
    #[must_use]
    pub fn with_ef_construction(mut self, ef_construction: usize) -> Self {
        self.ef_construction = ef_construction;
        self
    }

    /// Sets the default query beam width.
    #[must_use]
    pub fn with_ef_search(mut self, ef_search: usize) -> Self {
        self.ef_search = Some(ef_search);
        self
    }

    /// Sets the level sampler seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the level sampling multiplier.
    #[must_use]
    pub fn with_level_scale(mut self, level_scale: LevelScale) -> Self {
        self.level_scale = level_scale;
        self
    }

    /// Sets the neighbor-side back-edge policy.
    #[must_use]
    pub fn with_neighbor_policy(mut self, policy: NeighborPolicy) -> Self {
        self.neighbor_policy = policy;
        self
    }

    /// Sets the insertion entry strategy.
    #[must_use]
    pub fn with_entry_strategy(mut self, strategy: EntryStrategy) -> Self {
        self.entry_strategy = strategy;
        self
    }

    /// Sets the capacity policy.
    #[must_use]
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }

    /// Highest layer of the graph, `floor(log2(capacity))`.
    #[must_use]
    pub fn max_layer(&self) -> usize {
        self.capacity.max(1).ilog2() as usize
    }

    /// Link budget for a layer: `M_max` on layer 0, `M` above.
    #[must_use]
    pub fn max_links(&self, layer: usize) -> usize {
        if layer == 0 {
            self.m_max
        } else {
            self.m
        }
    }

    /// Multiplier applied to `-ln(U)` by the level sampler.
    #[must_use]
    pub fn level_multiplier(&self) -> f64 {
        match self.level_scale {
            LevelScale::ConnectionCount => self.m as f64,
            LevelScale::Canonical => {
                if self.m > 1 {
                    1.0 / (self.m as f64).ln()
                } else {
                    // ln(1) = 0: no promotion at all
                    0.0
                }
            }
            LevelScale::Fixed(mult) => mult,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("index.capacity", self.capacity),
            ("index.m", self.m),
            ("index.m_max", self.m_max),
            ("index.ef_construction", self.ef_construction),
        ];
        for (key, value) in checks {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "value must be >= 1".to_string(),
                });
            }
        }

        if self.ef_search == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "index.ef_search".to_string(),
                message: "value must be >= 1".to_string(),
            });
        }

        if let LevelScale::Fixed(mult) = self.level_scale {
            if !mult.is_finite() || mult < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: "index.level_scale".to_string(),
                    message: format!("multiplier {mult} must be finite and >= 0"),
                });
            }
        }

        Ok(())
    }
}
