//! Fundamental geometric and simulation types.
//!
//! Headings follow the canvas convention: 0 = +x (east), +π/2 = +y (south on
//! screen). All geometry helpers are pure functions.

use std::f64::consts::{PI, TAU};
use std::fmt;

use serde::{Deserialize, Serialize};

/// 2D vector in arena units.
pub use glam::DVec2 as Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    a.distance(b)
}

/// Unit vector in the direction of `v`, or zero for a zero-length input.
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Signed shortest rotation from heading `from` to heading `to`, in (−π, π].
pub fn angle_diff(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(TAU);
    if diff > PI {
        diff - TAU
    } else {
        diff
    }
}

/// Unit vector for a heading.
pub fn heading_vector(heading: f64) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Heading from `from` toward `to`.
pub fn bearing(from: Vec2, to: Vec2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Turn `heading` toward `desired` by at most `max_turn` radians.
pub fn steer_toward(heading: f64, desired: f64, max_turn: f64) -> f64 {
    let diff = angle_diff(heading, desired);
    heading + diff.signum() * diff.abs().min(max_turn)
}

/// Opaque target identifier. Issued monotonically, so ascending order is spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T-{:04}", self.0)
    }
}

/// Patrol drone identifier: the drone's fixed slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DroneId(pub u8);

impl DroneId {
    /// Slot index (0-based), also the parking slot at the base.
    pub fn slot(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DroneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VTOL-{:02}", self.0 + 1)
    }
}

/// Attack drone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttackDroneId(pub u32);

impl fmt::Display for AttackDroneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ATK-{:03}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of non-empty advances so far.
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick of `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += delta_ms;
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms / crate::constants::MS_PER_SEC
    }
}

/// Base position.
pub fn base_position() -> Vec2 {
    Vec2::new(crate::constants::BASE_X, crate::constants::BASE_Y)
}

/// Parking slot for a drone at the base.
pub fn parking_slot(drone: DroneId) -> Vec2 {
    use crate::constants::BASE_SLOT_SPACING;
    base_position() + Vec2::new(0.0, (drone.slot() as f64 - 1.5) * BASE_SLOT_SPACING)
}

/// Waypoint loop for a patrol sector.
pub fn sector_waypoints(sector: usize) -> Vec<Vec2> {
    use crate::constants::PATROL_SECTORS;
    PATROL_SECTORS[sector % PATROL_SECTORS.len()]
        .iter()
        .map(|&[x, y]| Vec2::new(x, y))
        .collect()
}
