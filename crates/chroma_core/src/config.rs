use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_PARTICLE_COUNT, DEFAULT_WIDTH};
use crate::error::ConfigError;
use crate::types::Species;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of particles in the world
    pub particle_count: usize,
    /// How many species are in play (a prefix of [`Species::ALL`])
    pub species_count: usize,
    /// World width in pixels
    pub width: f64,
    /// World height in pixels
    pub height: f64,
    /// Random seed for deterministic runs
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            species_count: Species::COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulation cannot run on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(ConfigError::BadDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.species_count == 0 || self.species_count > Species::COUNT {
            return Err(ConfigError::BadSpeciesCount {
                given: self.species_count,
            });
        }
        Ok(())
    }
}
