//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the patrol fleet, vessels entering from the sea edges, and attack
//! drones launched from the base.

use std::f64::consts::{FRAC_PI_2, PI};

use hecs::{Entity, World};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use coastwatch_core::components::*;
use coastwatch_core::constants::*;
use coastwatch_core::enums::*;
use coastwatch_core::types::{
    base_position, heading_vector, parking_slot, AttackDroneId, DroneId, TargetId, Vec2,
};

/// Spawn the initial fleet: four drones parked at the base, the first of
/// each sector already on patrol.
pub fn setup_fleet(world: &mut World) {
    for slot in 0..DRONE_COUNT {
        spawn_patrol_drone(world, DroneId(slot as u8));
    }
}

pub fn spawn_patrol_drone(world: &mut World, id: DroneId) -> Entity {
    let slot = id.slot();
    let state = if slot < PATROL_SECTORS.len() {
        DroneState::Patrol
    } else {
        DroneState::Idle
    };

    world.spawn((
        PatrolDrone {
            id,
            state,
            target: None,
            sector: slot % PATROL_SECTORS.len(),
            waypoint_index: 0,
            battery: BATTERY_FULL,
        },
        parked(parking_slot(id)),
    ))
}

fn parked(position: Vec2) -> Kinematics {
    Kinematics {
        position,
        velocity: heading_vector(0.0),
        speed: 0.0,
        heading: 0.0,
    }
}

/// Where a vessel enters the arena and which way it points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub position: Vec2,
    pub heading: f64,
}

/// Pick an entry edge: right 40%, top-right 30%, bottom-right 30%.
/// Vessels start just outside the arena pointing inward, with some spread.
pub fn roll_spawn_point(rng: &mut ChaCha8Rng) -> SpawnPoint {
    let edge: f64 = rng.gen();
    let spread = rng.gen_range(-SPAWN_HEADING_SPREAD..SPAWN_HEADING_SPREAD);
    let half_width = ARENA_WIDTH / 2.0;

    if edge < SPAWN_EDGE_RIGHT {
        SpawnPoint {
            position: Vec2::new(
                ARENA_WIDTH + SPAWN_EDGE_OFFSET,
                rng.gen_range(0.0..ARENA_HEIGHT),
            ),
            heading: PI + spread,
        }
    } else if edge < SPAWN_EDGE_TOP {
        SpawnPoint {
            position: Vec2::new(rng.gen_range(half_width..ARENA_WIDTH), -SPAWN_EDGE_OFFSET),
            heading: FRAC_PI_2 + spread,
        }
    } else {
        SpawnPoint {
            position: Vec2::new(
                rng.gen_range(half_width..ARENA_WIDTH),
                ARENA_HEIGHT + SPAWN_EDGE_OFFSET,
            ),
            heading: -FRAC_PI_2 + spread,
        }
    }
}

/// Cruise speed for a newly spawned vessel. Enemies are the fast movers.
pub fn roll_speed(rng: &mut ChaCha8Rng, kind: TargetKind) -> f64 {
    match kind {
        TargetKind::Enemy => rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX),
        _ => rng.gen_range(VESSEL_SPEED_MIN..VESSEL_SPEED_MAX),
    }
}

/// Spawn a random vessel at a random sea edge.
pub fn spawn_random_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    table: &WeightedIndex<f64>,
    id: TargetId,
) -> Entity {
    let kind = TargetKind::ALL[table.sample(rng)];
    let point = roll_spawn_point(rng);
    let speed = roll_speed(rng, kind);
    spawn_target(world, id, kind, point.position, point.heading, speed)
}

/// Spawn a vessel with explicit kinematics.
pub fn spawn_target(
    world: &mut World,
    id: TargetId,
    kind: TargetKind,
    position: Vec2,
    heading: f64,
    speed: f64,
) -> Entity {
    world.spawn((
        Target { id, kind },
        Kinematics {
            position,
            velocity: heading_vector(heading),
            speed,
            heading,
        },
    ))
}

/// Launch an attack drone from the base at `target`.
pub fn spawn_attack_drone(world: &mut World, id: AttackDroneId, target: TargetId) -> Entity {
    world.spawn((
        AttackDrone {
            id,
            state: AttackDroneState::Intercepting,
            target: Some(target),
        },
        Kinematics {
            speed: ATTACK_DRONE_SPEED,
            ..parked(base_position())
        },
    ))
}
