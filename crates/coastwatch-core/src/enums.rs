//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Vessel classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetKind {
    Friendly,
    Enemy,
    Fishing,
    Unknown,
}

impl TargetKind {
    /// All kinds, in spawn-weight order.
    pub const ALL: [TargetKind; 4] = [
        TargetKind::Friendly,
        TargetKind::Enemy,
        TargetKind::Fishing,
        TargetKind::Unknown,
    ];
}

/// Patrol drone behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DroneState {
    /// Parked at the base, recharging.
    #[default]
    Idle,
    /// Following the sector waypoint loop.
    Patrol,
    /// Shadowing a claimed enemy vessel.
    Tracking,
    /// Forced return to base on low battery.
    Returning,
}

impl DroneState {
    /// Whether a drone in this state covers its sector.
    pub fn covers_sector(&self) -> bool {
        matches!(self, DroneState::Patrol | DroneState::Tracking)
    }

    /// Whether a drone in this state is in the air.
    pub fn is_airborne(&self) -> bool {
        !matches!(self, DroneState::Idle)
    }
}

/// Attack drone flight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackDroneState {
    #[default]
    Intercepting,
    Returning,
}

/// Process-wide weather.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weather {
    #[default]
    Clear,
    Fog,
    Rain,
    Storm,
}

impl Weather {
    /// All weather values, drawn uniformly by the weather controller.
    pub const ALL: [Weather; 4] = [Weather::Clear, Weather::Fog, Weather::Rain, Weather::Storm];

    /// Human-readable name for log messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Storm => "storm",
        }
    }

    /// Radius within which drones perceive enemy vessels.
    pub fn detection_range(&self) -> f64 {
        match self {
            Self::Clear => 200.0,
            Self::Fog => 130.0,
            Self::Rain => 160.0,
            Self::Storm => 100.0,
        }
    }

    /// Drone speed and turn-rate multiplier.
    pub fn speed_multiplier(&self) -> f64 {
        match self {
            Self::Clear => 1.0,
            Self::Fog => 0.8,
            Self::Rain => 0.9,
            Self::Storm => 0.6,
        }
    }

    /// Drone battery drain multiplier.
    pub fn drain_multiplier(&self) -> f64 {
        match self {
            Self::Clear | Self::Fog => 1.0,
            Self::Rain => 1.2,
            Self::Storm => 2.0,
        }
    }

    /// All three coefficients for the current tick.
    pub fn effects(&self) -> WeatherEffects {
        WeatherEffects {
            detection_range: self.detection_range(),
            speed_multiplier: self.speed_multiplier(),
            drain_multiplier: self.drain_multiplier(),
        }
    }
}

/// Weather-derived coefficients, read-only for the rest of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherEffects {
    pub detection_range: f64,
    pub speed_multiplier: f64,
    pub drain_multiplier: f64,
}

impl Default for WeatherEffects {
    fn default() -> Self {
        Weather::Clear.effects()
    }
}

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Alert,
}
