use thiserror::Error;

use crate::types::Species;

/// Configuration problems that must stop a run before it starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A zero-area (or negative, or non-finite) world makes the minimum-image
    /// half-dimension comparison meaningless, so it is rejected up front
    /// instead of surfacing later as NaN positions.
    #[error("world dimensions must be positive and finite, got {width}x{height}")]
    BadDimensions { width: f64, height: f64 },

    #[error("particle count must be nonzero")]
    NoParticles,

    #[error("species count must be in 1..={}, got {given}", Species::COUNT)]
    BadSpeciesCount { given: usize },
}
