//! Error types for `navgraph`.
//!
//! Every fallible index operation returns [`Result`]. Error codes follow the
//! pattern `NAVG-XXX` so they can be matched in logs.

use thiserror::Error;

/// Result type alias for `navgraph` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in index operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Capacity exceeded under `CapacityPolicy::Reject` (NAVG-001).
    #[error("[NAVG-001] Index capacity exceeded: {capacity} points")]
    CapacityExceeded {
        /// Configured capacity.
        capacity: usize,
    },

    /// Dimension mismatch (NAVG-002).
    #[error("[NAVG-002] Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension fixed by the first inserted point.
        expected: usize,
        /// Dimension of the offending point.
        actual: usize,
    },

    /// Invalid vector (NAVG-003).
    #[error("[NAVG-003] Invalid vector: {0}")]
    InvalidVector(String),

    /// Configuration error (NAVG-004).
    #[error("[NAVG-004] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "NAVG-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "NAVG-001",
            Self::DimensionMismatch { .. } => "NAVG-002",
            Self::InvalidVector(_) => "NAVG-003",
            Self::Config(_) => "NAVG-004",
        }
    }

    /// Returns true if the index is still usable after this error.
    ///
    /// Only a bad configuration prevents an index from being built at all.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
