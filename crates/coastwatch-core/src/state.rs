//! Read-only views of the simulation for collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{AttackDroneId, DroneId, SimTime, TargetId, Vec2};

/// Target counts by kind plus current weather, published on a fixed cadence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub friendly: u32,
    pub enemy: u32,
    pub fishing: u32,
    pub unknown: u32,
    pub weather: Weather,
}

impl StatsSnapshot {
    /// Count one target of the given kind.
    pub fn record(&mut self, kind: TargetKind) {
        match kind {
            TargetKind::Friendly => self.friendly += 1,
            TargetKind::Enemy => self.enemy += 1,
            TargetKind::Fishing => self.fishing += 1,
            TargetKind::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.friendly + self.enemy + self.fishing + self.unknown
    }
}

/// Complete simulation state for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub weather: Weather,
    pub effects: WeatherEffects,
    pub base: Vec2,
    pub targets: Vec<TargetView>,
    pub drones: Vec<DroneView>,
    pub attack_drones: Vec<AttackDroneView>,
    /// Continuous tracking time per target (ms).
    pub tracked: Vec<TrackedView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub kind: TargetKind,
    pub position: Vec2,
    pub heading: f64,
    pub speed: f64,
    /// Drone currently tracking this target, if any.
    pub tracked_by: Option<DroneId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub id: DroneId,
    pub state: DroneState,
    pub position: Vec2,
    pub heading: f64,
    pub speed: f64,
    pub battery: f64,
    pub low_power: bool,
    pub target: Option<TargetId>,
    pub sector: usize,
    pub waypoints: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackDroneView {
    pub id: AttackDroneId,
    pub state: AttackDroneState,
    pub position: Vec2,
    pub heading: f64,
    pub target: Option<TargetId>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrackedView {
    pub target: TargetId,
    pub duration_ms: f64,
    pub locked: bool,
}
