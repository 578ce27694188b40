//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Cross-entity references are
//! ids, never `hecs::Entity` handles, so a referenced entity may vanish mid-tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{AttackDroneId, DroneId, TargetId, Vec2};

/// Position and motion shared by every moving entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vec2,
    /// Unit heading vector, kept in sync with `heading`.
    pub velocity: Vec2,
    /// Scalar speed (units per 100 ms).
    pub speed: f64,
    /// Heading in radians.
    pub heading: f64,
}

/// A surface vessel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    pub kind: TargetKind,
}

/// A patrol (VTOL) drone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatrolDrone {
    pub id: DroneId,
    pub state: DroneState,
    /// Claimed target (lookup key, not ownership).
    pub target: Option<TargetId>,
    /// Patrol sector index.
    pub sector: usize,
    pub waypoint_index: usize,
    /// Battery charge (percent).
    pub battery: f64,
}

/// An interceptor launched on lock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackDrone {
    pub id: AttackDroneId,
    pub state: AttackDroneState,
    /// Target being intercepted (lookup key, cleared on withdrawal).
    pub target: Option<TargetId>,
}
