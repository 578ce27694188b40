//! Driver configuration: a TOML file with `[sim]` and `[driver]` tables.
//!
//! ```toml
//! [sim]
//! seed = 7
//! initial_weather = "FOG"
//!
//! [sim.spawn_weights]
//! enemy = 0.6
//!
//! [driver]
//! frame_rate_hz = 30
//! duration_secs = 120
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use coastwatch_core::constants::LOG_DISPLAY_CAPACITY;
use coastwatch_sim::SimConfig;

use crate::error::{AppError, Result};

/// Wall-clock pacing for the frame loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub frame_rate_hz: f64,
    /// Simulated ms per wall-clock ms.
    pub time_scale: f64,
    /// Stop after this much simulated time. Runs until shut down if absent.
    pub duration_secs: Option<f64>,
    /// Entries kept in the display log.
    pub log_capacity: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            frame_rate_hz: 60.0,
            time_scale: 1.0,
            duration_secs: None,
            log_capacity: LOG_DISPLAY_CAPACITY,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.frame_rate_hz.is_finite() && self.frame_rate_hz > 0.0) {
            return Err(AppError::Driver(format!(
                "frame_rate_hz must be positive, got {}",
                self.frame_rate_hz
            )));
        }
        // Zero would never reach the configured duration.
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(AppError::Driver(format!(
                "time_scale must be positive, got {}",
                self.time_scale
            )));
        }
        if let Some(d) = self.duration_secs {
            if !(d.is_finite() && d >= 0.0) {
                return Err(AppError::Driver(format!(
                    "duration_secs must be non-negative, got {d}"
                )));
            }
        }
        if self.log_capacity == 0 {
            return Err(AppError::Driver("log_capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Nominal frame length in ms.
    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.frame_rate_hz
    }

    pub fn duration_ms(&self) -> Option<f64> {
        self.duration_secs.map(|s| s * 1000.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub driver: DriverConfig,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load and parse a config file. Validation is separate so CLI
    /// overrides can be applied first.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.sim.validate()?;
        self.driver.validate()
    }
}
