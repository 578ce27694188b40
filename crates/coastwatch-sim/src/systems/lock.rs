//! Lock system: accrues tracking time and launches attack drones on lock.

use std::collections::BTreeSet;

use hecs::World;

use coastwatch_core::components::PatrolDrone;
use coastwatch_core::enums::DroneState;
use coastwatch_core::events::AudioCue;
use coastwatch_core::types::{AttackDroneId, TargetId};

use crate::ledger::TrackingLedger;
use crate::outbox::Outbox;
use crate::world_setup;

/// Targets some drone is TRACKING right now.
pub fn tracked_targets(world: &World) -> BTreeSet<TargetId> {
    world
        .query::<&PatrolDrone>()
        .iter()
        .filter(|(_, drone)| drone.state == DroneState::Tracking)
        .filter_map(|(_, drone)| drone.target)
        .collect()
}

/// Update the ledger and launch one attack drone per newly locked target.
pub fn run(
    world: &mut World,
    ledger: &mut TrackingLedger,
    next_attack_id: &mut u32,
    delta_ms: f64,
    outbox: &mut Outbox,
) {
    let tracked = tracked_targets(world);
    for target in ledger.update(&tracked, delta_ms) {
        *next_attack_id += 1;
        let attacker = AttackDroneId(*next_attack_id);
        world_setup::spawn_attack_drone(world, attacker, target);
        tracing::debug!(vessel = %target, %attacker, "lock acquired");
        outbox.alert(format!(
            "Target {target} locked. Launching attack drone {attacker} to intercept."
        ));
        outbox.cue(AudioCue::LockAcquired { target });
    }
}
