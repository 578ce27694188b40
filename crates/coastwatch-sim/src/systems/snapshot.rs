//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only; it never modifies the world.

use std::collections::HashMap;

use hecs::World;

use coastwatch_core::components::*;
use coastwatch_core::enums::Weather;
use coastwatch_core::state::*;
use coastwatch_core::types::{base_position, sector_waypoints, DroneId, SimTime, TargetId};
use coastwatch_drone_ai::battery;

use crate::ledger::TrackingLedger;

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    weather: Weather,
    ledger: &TrackingLedger,
) -> SimSnapshot {
    let drones = build_drones(world);
    let trackers: HashMap<TargetId, DroneId> = drones
        .iter()
        .filter(|d| d.state == coastwatch_core::enums::DroneState::Tracking)
        .filter_map(|d| d.target.map(|t| (t, d.id)))
        .collect();

    SimSnapshot {
        time: *time,
        weather,
        effects: weather.effects(),
        base: base_position(),
        targets: build_targets(world, &trackers),
        drones,
        attack_drones: build_attack_drones(world),
        tracked: ledger
            .iter()
            .map(|(target, duration_ms, locked)| TrackedView {
                target,
                duration_ms,
                locked,
            })
            .collect(),
    }
}

fn build_targets(world: &World, trackers: &HashMap<TargetId, DroneId>) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Kinematics)>()
        .iter()
        .map(|(_, (target, k))| TargetView {
            id: target.id,
            kind: target.kind,
            position: k.position,
            heading: k.heading,
            speed: k.speed,
            tracked_by: trackers.get(&target.id).copied(),
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}

fn build_drones(world: &World) -> Vec<DroneView> {
    let mut drones: Vec<DroneView> = world
        .query::<(&PatrolDrone, &Kinematics)>()
        .iter()
        .map(|(_, (drone, k))| DroneView {
            id: drone.id,
            state: drone.state,
            position: k.position,
            heading: k.heading,
            speed: k.speed,
            battery: drone.battery,
            low_power: battery::is_low_power(drone.battery),
            target: drone.target,
            sector: drone.sector,
            waypoints: sector_waypoints(drone.sector),
        })
        .collect();
    drones.sort_by_key(|d| d.id);
    drones
}

fn build_attack_drones(world: &World) -> Vec<AttackDroneView> {
    let mut attackers: Vec<AttackDroneView> = world
        .query::<(&AttackDrone, &Kinematics)>()
        .iter()
        .map(|(_, (drone, k))| AttackDroneView {
            id: drone.id,
            state: drone.state,
            position: k.position,
            heading: k.heading,
            target: drone.target,
        })
        .collect();
    attackers.sort_by_key(|a| a.id);
    attackers
}
