//! Patrol drone system: runs the drone FSM for each drone in slot order.
//!
//! Drones update sequentially. Each drone's context is built from the world
//! as left by the drones before it, so a claim made by VTOL-01 this tick is
//! already visible to VTOL-02.

use std::collections::HashSet;

use hecs::{Entity, World};

use coastwatch_core::components::{Kinematics, PatrolDrone, Target};
use coastwatch_core::constants::METRES_PER_UNIT;
use coastwatch_core::enums::{DroneState, TargetKind, WeatherEffects};
use coastwatch_core::types::{base_position, parking_slot, sector_waypoints, DroneId, TargetId, Vec2};
use coastwatch_drone_ai::fsm::{self, Contact, DroneContext, DroneEvent};

use crate::outbox::Outbox;

/// Drone entities in slot order.
fn drones_in_slot_order(world: &World) -> Vec<(Entity, DroneId)> {
    let mut drones: Vec<(Entity, DroneId)> = world
        .query::<&PatrolDrone>()
        .iter()
        .map(|(entity, drone)| (entity, drone.id))
        .collect();
    drones.sort_by_key(|&(_, id)| id);
    drones
}

/// Targets currently claimed by any drone.
fn claimed_targets(world: &World) -> HashSet<TargetId> {
    world
        .query::<&PatrolDrone>()
        .iter()
        .filter_map(|(_, drone)| drone.target)
        .collect()
}

/// Live enemy vessels in spawn order.
fn enemy_contacts(world: &World, claims: &HashSet<TargetId>) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = world
        .query::<(&Target, &Kinematics)>()
        .iter()
        .filter(|(_, (target, _))| target.kind == TargetKind::Enemy)
        .map(|(_, (target, kinematics))| Contact {
            id: target.id,
            position: kinematics.position,
            speed: kinematics.speed,
            claimed: claims.contains(&target.id),
        })
        .collect();
    contacts.sort_by_key(|c| c.id);
    contacts
}

/// Look up a vessel of any kind by id.
fn find_contact(world: &World, id: TargetId) -> Option<Contact> {
    world
        .query::<(&Target, &Kinematics)>()
        .iter()
        .find(|(_, (target, _))| target.id == id)
        .map(|(_, (target, kinematics))| Contact {
            id: target.id,
            position: kinematics.position,
            speed: kinematics.speed,
            claimed: true,
        })
}

/// Update every patrol drone for one tick.
pub fn run(world: &mut World, effects: WeatherEffects, delta_ms: f64, outbox: &mut Outbox) {
    let order = drones_in_slot_order(world);
    let base = base_position();

    for &(entity, id) in &order {
        let (drone, kinematics) = match world.query_one_mut::<(&PatrolDrone, &Kinematics)>(entity) {
            Ok((drone, kinematics)) => (drone.clone(), *kinematics),
            Err(_) => continue,
        };

        let claims = claimed_targets(world);
        let enemies = enemy_contacts(world, &claims);
        let claimed = drone.target.and_then(|target| find_contact(world, target));

        let mut fleet_positions: Vec<Vec2> = Vec::with_capacity(order.len());
        let mut sector_covered = false;
        for (other, (peer, peer_kinematics)) in world.query::<(&PatrolDrone, &Kinematics)>().iter() {
            if other == entity {
                continue;
            }
            fleet_positions.push(peer_kinematics.position);
            if peer.sector == drone.sector && peer.state.covers_sector() {
                sector_covered = true;
            }
        }

        let waypoints = sector_waypoints(drone.sector);
        let ctx = DroneContext {
            drone: &drone,
            kinematics,
            waypoints: &waypoints,
            base,
            parking_slot: parking_slot(id),
            effects,
            delta_ms,
            sector_covered,
            claimed,
            enemies: &enemies,
            fleet_positions: &fleet_positions,
        };
        let update = fsm::evaluate(&ctx);

        if let Ok((drone, kinematics)) =
            world.query_one_mut::<(&mut PatrolDrone, &mut Kinematics)>(entity)
        {
            drone.state = update.state;
            drone.battery = update.battery;
            drone.waypoint_index = update.waypoint_index;
            drone.target = update.target;
            *kinematics = update.kinematics;
        }

        for event in &update.events {
            report_event(id, &drone, event, outbox);
        }

        for target in update.handoffs {
            hand_off(world, &order, id, target, outbox);
        }
    }
}

fn report_event(id: DroneId, drone: &PatrolDrone, event: &DroneEvent, outbox: &mut Outbox) {
    match *event {
        DroneEvent::Launched => {
            let sector = drone.sector + 1;
            outbox.info(format!("{id} charged, launching to cover sector {sector}."));
        }
        DroneEvent::Detected { target, range } => {
            tracing::debug!(drone = %id, vessel = %target, range, "contact acquired");
            let metres = range * METRES_PER_UNIT;
            outbox.alert(format!(
                "{id} detected hostile vessel {target} at {metres:.0} m. Tracking."
            ));
        }
        DroneEvent::LowPower { battery } => {
            outbox.warning(format!(
                "{id} battery low ({battery:.1}%). Entering power-save mode, returning to base."
            ));
        }
        DroneEvent::Landed => {
            outbox.info(format!("{id} landed at base, recharging."));
        }
        DroneEvent::ContactLost { target } => {
            outbox.info(format!(
                "Hostile vessel {target} left detection range. {id} resuming patrol."
            ));
        }
        DroneEvent::TargetVanished { target } => {
            outbox.info(format!("Hostile vessel {target} is gone. {id} resuming patrol."));
        }
    }
}

/// Task the first patrolling drone (by slot) with `target`. No-op if none is free
/// or the target was claimed in the meantime.
fn hand_off(
    world: &mut World,
    order: &[(Entity, DroneId)],
    spotter: DroneId,
    target: TargetId,
    outbox: &mut Outbox,
) {
    if claimed_targets(world).contains(&target) {
        return;
    }

    for &(entity, id) in order {
        if id == spotter {
            continue;
        }
        let Ok(drone) = world.query_one_mut::<&mut PatrolDrone>(entity) else {
            continue;
        };
        if drone.state != DroneState::Patrol {
            continue;
        }
        drone.state = DroneState::Tracking;
        drone.target = Some(target);
        outbox.alert(format!(
            "Intel share: {spotter} spotted hostile vessel {target}, tasking {id} to track it."
        ));
        return;
    }

    tracing::debug!(%spotter, vessel = %target, "no patrolling drone free for handoff");
}
