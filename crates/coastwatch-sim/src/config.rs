//! Simulation configuration and its validation.

use rand::distributions::{WeightedError, WeightedIndex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use coastwatch_core::constants::*;
use coastwatch_core::enums::{TargetKind, Weather};

/// Invalid configuration. The running simulation itself has no error paths.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid spawn weights: {0}")]
    SpawnWeights(#[from] WeightedError),

    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("{name} must be a positive duration, got {value} ms")]
    Interval { name: &'static str, value: f64 },

    #[error("max_targets must be at least 1")]
    ZeroTargetCap,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Relative spawn weights per vessel kind. Normalized when the spawn table is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnWeights {
    pub friendly: f64,
    pub enemy: f64,
    pub fishing: f64,
    pub unknown: f64,
}

impl Default for SpawnWeights {
    fn default() -> Self {
        let [friendly, enemy, fishing, unknown] = DEFAULT_SPAWN_WEIGHTS;
        Self {
            friendly,
            enemy,
            fishing,
            unknown,
        }
    }
}

impl SpawnWeights {
    /// Weights in `TargetKind::ALL` order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.friendly, self.enemy, self.fishing, self.unknown]
    }

    /// Probability of drawing `kind` after normalization.
    pub fn probability(&self, kind: TargetKind) -> f64 {
        let weights = self.as_array();
        let total: f64 = weights.iter().sum();
        let index = TargetKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        if total > 0.0 {
            weights[index] / total
        } else {
            0.0
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and same deltas = same simulation.
    pub seed: u64,
    pub spawn_weights: SpawnWeights,
    /// Chance that a due spawn attempt produces a vessel.
    pub spawn_probability: f64,
    pub spawn_interval_ms: f64,
    pub max_targets: usize,
    pub weather_interval_ms: f64,
    /// Chance that a due weather roll draws a new value.
    pub weather_change_probability: f64,
    pub stats_interval_ms: f64,
    pub initial_weather: Weather,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_weights: SpawnWeights::default(),
            spawn_probability: SPAWN_PROBABILITY,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            max_targets: MAX_TARGETS,
            weather_interval_ms: WEATHER_INTERVAL_MS,
            weather_change_probability: WEATHER_CHANGE_PROBABILITY,
            stats_interval_ms: STATS_INTERVAL_MS,
            initial_weather: Weather::Clear,
        }
    }
}

impl SimConfig {
    /// Check every field; returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.spawn_table()?;

        for (name, value) in [
            ("spawn_probability", self.spawn_probability),
            ("weather_change_probability", self.weather_change_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }

        for (name, value) in [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("weather_interval_ms", self.weather_interval_ms),
            ("stats_interval_ms", self.stats_interval_ms),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Interval { name, value });
            }
        }

        if self.max_targets == 0 {
            return Err(ConfigError::ZeroTargetCap);
        }
        Ok(())
    }

    /// Build the normalized weighted distribution over `TargetKind::ALL`.
    pub fn spawn_table(&self) -> Result<WeightedIndex<f64>> {
        let weights = self.spawn_weights.as_array();
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(WeightedError::InvalidWeight.into());
        }
        Ok(WeightedIndex::new(weights)?)
    }
}
