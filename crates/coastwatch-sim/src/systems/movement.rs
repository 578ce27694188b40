//! Vessel movement: straight-line cruise with coastal avoidance.
//!
//! Position advances by velocity * speed * dt * SPEED_SCALE. Inside the
//! coastal strip a vessel turns toward an escape heading along the coast.

use hecs::World;

use coastwatch_core::components::{Kinematics, Target};
use coastwatch_core::constants::*;
use coastwatch_core::types::{heading_vector, steer_toward};

/// Escape heading for a vessel in the coastal strip: north of the split it
/// bears down-coast, south of it up-coast.
pub fn coastal_escape_heading(y: f64) -> f64 {
    if y < COAST_SPLIT_Y {
        COAST_ESCAPE_HEADING
    } else {
        -COAST_ESCAPE_HEADING
    }
}

/// Steer and integrate one vessel.
pub fn step(kinematics: &mut Kinematics, delta_ms: f64) {
    if kinematics.position.x < COAST_ZONE_X {
        let desired = coastal_escape_heading(kinematics.position.y);
        kinematics.heading = steer_toward(kinematics.heading, desired, COAST_TURN_RATE);
        kinematics.velocity = heading_vector(kinematics.heading);
    }
    kinematics.position += kinematics.velocity * kinematics.speed * delta_ms * SPEED_SCALE;
}

/// Move every vessel.
pub fn run(world: &mut World, delta_ms: f64) {
    for (_entity, (_target, kinematics)) in world.query_mut::<(&Target, &mut Kinematics)>() {
        step(kinematics, delta_ms);
    }
}
