//! Configuration for a Duality roller.

use serde::Deserialize;

use crate::dice::RngDieSource;
use crate::duality::{DEFAULT_DIFFICULTY, DualityResolver, RollRequest};
use crate::error::{MechError, MechResult};

/// Configuration for building a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DualityConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Difficulty used when a roll does not name one.
    pub default_difficulty: i32,
}

impl Default for DualityConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl DualityConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> MechResult<Self> {
        serde_json::from_str(json).map_err(|e| MechError::InvalidConfig(e.to_string()))
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default difficulty.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Build the die source this config describes.
    pub fn die_source(&self) -> RngDieSource {
        match self.seed {
            Some(seed) => RngDieSource::seeded(seed),
            None => RngDieSource::from_entropy(),
        }
    }

    /// Build a resolver over [`Self::die_source`].
    pub fn resolver(&self) -> DualityResolver<RngDieSource> {
        DualityResolver::new(self.die_source())
    }

    /// A request for `modifier` at the configured default difficulty.
    pub fn request(&self, modifier: i32) -> RollRequest {
        RollRequest::new(modifier).with_difficulty(self.default_difficulty)
    }
}
