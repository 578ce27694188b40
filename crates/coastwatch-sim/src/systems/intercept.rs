//! Attack drone system: lead-pursuit intercept, kill, and withdrawal.

use hecs::{Entity, World};

use coastwatch_core::components::{AttackDrone, Kinematics, Target};
use coastwatch_core::constants::*;
use coastwatch_core::enums::AttackDroneState;
use coastwatch_core::events::AudioCue;
use coastwatch_core::types::{base_position, bearing, distance, heading_vector, steer_toward, TargetId};

use crate::guidance;
use crate::ledger::TrackingLedger;
use crate::outbox::Outbox;

fn find_target(world: &World, id: TargetId) -> Option<(Entity, Kinematics)> {
    world
        .query::<(&Target, &Kinematics)>()
        .iter()
        .find(|(_, (target, _))| target.id == id)
        .map(|(entity, (_, kinematics))| (entity, *kinematics))
}

fn fly_toward(kinematics: &mut Kinematics, aim: coastwatch_core::types::Vec2, delta_ms: f64) {
    let desired = bearing(kinematics.position, aim);
    kinematics.heading = steer_toward(kinematics.heading, desired, ATTACK_TURN_RATE);
    kinematics.velocity = heading_vector(kinematics.heading);
    kinematics.speed = ATTACK_DRONE_SPEED;
    kinematics.position += kinematics.velocity * ATTACK_DRONE_SPEED * delta_ms * SPEED_SCALE;
}

/// Update attack drones in id order. A destroyed vessel is removed at once so
/// later drones this tick no longer see it.
pub fn run(
    world: &mut World,
    ledger: &TrackingLedger,
    delta_ms: f64,
    despawn_buffer: &mut Vec<Entity>,
    outbox: &mut Outbox,
) {
    let mut attackers: Vec<(Entity, AttackDrone, Kinematics)> = world
        .query::<(&AttackDrone, &Kinematics)>()
        .iter()
        .map(|(entity, (drone, kinematics))| (entity, *drone, *kinematics))
        .collect();
    attackers.sort_by_key(|(_, drone, _)| drone.id);

    despawn_buffer.clear();

    for (entity, mut drone, mut kinematics) in attackers {
        match drone.state {
            AttackDroneState::Intercepting => {
                let target = drone
                    .target
                    .filter(|&id| ledger.is_tracked(id))
                    .and_then(|id| find_target(world, id).map(|found| (id, found)));

                let Some((target_id, (target_entity, target_kinematics))) = target else {
                    // Lock lost: withdraw without moving this tick.
                    drone.state = AttackDroneState::Returning;
                    let lost = drone.target.take();
                    if let Some(lost) = lost {
                        outbox.info(format!(
                            "Lock on {lost} lost. Attack drone {} returning to base.",
                            drone.id
                        ));
                    }
                    write_back(world, entity, drone, kinematics);
                    continue;
                };

                let aim = guidance::lead_point(kinematics.position, ATTACK_DRONE_SPEED, &target_kinematics);
                fly_toward(&mut kinematics, aim, delta_ms);

                if distance(kinematics.position, target_kinematics.position) < ATTACK_LETHAL_RADIUS {
                    let _ = world.despawn(target_entity);
                    tracing::debug!(vessel = %target_id, attacker = %drone.id, "vessel destroyed");
                    despawn_buffer.push(entity);
                    outbox.alert(format!(
                        "Attack drone {} destroyed target {target_id}.",
                        drone.id
                    ));
                    outbox.cue(AudioCue::TargetDestroyed { target: target_id });
                    continue;
                }
            }
            AttackDroneState::Returning => {
                let base = base_position();
                fly_toward(&mut kinematics, base, delta_ms);
                if distance(kinematics.position, base) < BASE_ARRIVAL_RADIUS {
                    despawn_buffer.push(entity);
                    continue;
                }
            }
        }
        write_back(world, entity, drone, kinematics);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn write_back(world: &mut World, entity: Entity, drone: AttackDrone, kinematics: Kinematics) {
    if let Ok((d, k)) = world.query_one_mut::<(&mut AttackDrone, &mut Kinematics)>(entity) {
        *d = drone;
        *k = kinematics;
    }
}
