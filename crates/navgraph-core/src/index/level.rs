//! Level sampling for new nodes.
//!
//! A node's level is `floor(-ln(U) * mult)` with `U ~ Uniform(0, 1]`,
//! clamped to the graph's top layer. The exponential tail is what gives the
//! upper layers their skip-list-like sparsity.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws levels from a seedable random source.
///
/// The source is a type parameter so tests and callers can swap in any
/// `rand::Rng`; with the default `StdRng` a fixed seed gives a fixed level
/// sequence.
#[derive(Debug, Clone)]
pub struct LevelSampler<R = StdRng> {
    rng: R,
    mult: f64,
    max_layer: usize,
}

impl LevelSampler<StdRng> {
    /// Creates a sampler backed by `StdRng` seeded with `seed`.
    #[must_use]
    pub fn seeded(mult: f64, max_layer: usize, seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), mult, max_layer)
    }
}

impl<R: Rng> LevelSampler<R> {
    /// Creates a sampler over an arbitrary random source.
    #[must_use]
    pub fn new(rng: R, mult: f64, max_layer: usize) -> Self {
        Self {
            rng,
            mult,
            max_layer,
        }
    }

    /// Highest level this sampler returns.
    #[must_use]
    pub fn max_layer(&self) -> usize {
        self.max_layer
    }

    /// Multiplier applied to `-ln(U)`.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        self.mult
    }

    /// Draws the next level.
    pub fn sample(&mut self) -> usize {
        // gen() is in [0, 1); flip it so ln never sees 0
        let uniform = 1.0 - self.rng.gen::<f64>();
        let raw = (-uniform.ln() * self.mult).floor();

        if raw.is_finite() && raw < self.max_layer as f64 {
            raw.max(0.0) as usize
        } else {
            self.max_layer
        }
    }
}
