//! Distance metrics and the distance capability used by the graph.
//!
//! The index never looks inside a point: it only asks a [`DistanceEngine`]
//! for the distance between two of them and asks the point for its
//! dimensionality through [`Dimensioned`]. Any metric that is symmetric,
//! deterministic and non-negative can be plugged in.

use serde::{Deserialize, Serialize};

/// Capability computing the distance between two points.
///
/// Implementations must be pure: `distance(a, b) == distance(b, a)`, the
/// same inputs always give the same output, and the result is `>= 0`.
/// Lower means closer.
pub trait DistanceEngine<T: ?Sized> {
    /// Computes the distance between two points of the same dimensionality.
    fn distance(&self, a: &T, b: &T) -> f32;
}

impl<T: ?Sized, F> DistanceEngine<T> for F
where
    F: Fn(&T, &T) -> f32,
{
    #[inline]
    fn distance(&self, a: &T, b: &T) -> f32 {
        self(a, b)
    }
}

/// Points that know their own dimensionality.
pub trait Dimensioned {
    /// Number of components in the point.
    fn dimension(&self) -> usize;
}

impl Dimensioned for Vec<f32> {
    #[inline]
    fn dimension(&self) -> usize {
        self.len()
    }
}

impl Dimensioned for Vec<f64> {
    #[inline]
    fn dimension(&self) -> usize {
        self.len()
    }
}

impl Dimensioned for Box<[f32]> {
    #[inline]
    fn dimension(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> Dimensioned for [f32; N] {
    #[inline]
    fn dimension(&self) -> usize {
        N
    }
}

/// Built-in distance metrics over `f32` vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Euclidean distance (L2 norm).
    #[default]
    Euclidean,

    /// Squared Euclidean distance. Same ranking as `Euclidean`, no `sqrt`.
    SquaredEuclidean,

    /// Manhattan distance (L1 norm).
    Manhattan,

    /// Cosine distance, `1 - cos(a, b)`, in `[0, 2]`.
    ///
    /// A zero vector has no direction and sits at distance `1` from
    /// everything.
    Cosine,
}

impl DistanceMetric {
    /// Calculates the distance between two vectors.
    ///
    /// Both slices are expected to have the same length; extra trailing
    /// components of the longer one are ignored.
    #[must_use]
    #[inline]
    pub fn calculate(&self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len(), "vector dimensions must match");
        match self {
            Self::Euclidean => squared_euclidean(a, b).sqrt(),
            Self::SquaredEuclidean => squared_euclidean(a, b),
            Self::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
            Self::Cosine => cosine_distance(a, b),
        }
    }
}

#[inline]
fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0_f32, 0.0_f32, 0.0_f32);
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    (1.0 - similarity).clamp(0.0, 2.0)
}

/// Distance engine evaluating a [`DistanceMetric`] on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuDistance {
    metric: DistanceMetric,
}

impl CpuDistance {
    /// Creates an engine for the given metric.
    #[must_use]
    pub const fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    /// Returns the metric this engine evaluates.
    #[must_use]
    pub const fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

impl DistanceEngine<Vec<f32>> for CpuDistance {
    #[inline]
    fn distance(&self, a: &Vec<f32>, b: &Vec<f32>) -> f32 {
        self.metric.calculate(a, b)
    }
}

impl DistanceEngine<Box<[f32]>> for CpuDistance {
    #[inline]
    fn distance(&self, a: &Box<[f32]>, b: &Box<[f32]>) -> f32 {
        self.metric.calculate(a, b)
    }
}

impl DistanceEngine<[f32]> for CpuDistance {
    #[inline]
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        self.metric.calculate(a, b)
    }
}

impl<const N: usize> DistanceEngine<[f32; N]> for CpuDistance {
    #[inline]
    fn distance(&self, a: &[f32; N], b: &[f32; N]) -> f32 {
        self.metric.calculate(a, b)
    }
}
