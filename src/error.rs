//! Error types for sampling runs.

use thiserror::Error;

/// Errors raised before a sampling run starts.
///
/// Every variant describes a violated precondition; once a run has started
/// it always completes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// The domain has a non-positive or non-finite side length.
    #[error("domain extent along axis {axis} must be positive and finite, got {value}")]
    InvalidExtent { axis: usize, value: f64 },

    /// The domain has a non-finite corner coordinate.
    #[error("domain bounds along axis {axis} must be finite, got [{min}, {max})")]
    InvalidBounds { axis: usize, min: f64, max: f64 },

    /// The minimum separation distance is not positive and finite.
    #[error("minimum distance must be positive and finite, got {0}")]
    InvalidDistance(f64),

    /// At least one candidate must be tried per active point.
    #[error("max attempts must be at least 1, got {0}")]
    InvalidAttempts(usize),

    /// The background grid would need more cells than can be addressed.
    #[error("background grid too large for the domain and minimum distance")]
    GridTooLarge,
}
