//! Target spawning system: occasional vessels from the sea edges.

use hecs::World;
use rand::distributions::WeightedIndex;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use coastwatch_core::components::Target;
use coastwatch_core::types::TargetId;

use crate::config::SimConfig;
use crate::world_setup;

/// Spawn cadence and the next id to hand out.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnSchedule {
    pub last_attempt_ms: f64,
    pub next_target_id: u32,
}

impl SpawnSchedule {
    pub fn allocate_id(&mut self) -> TargetId {
        self.next_target_id += 1;
        TargetId(self.next_target_id)
    }
}

/// Every `spawn_interval_ms`, if below the cap, spawn a vessel with
/// probability `spawn_probability`. Returns the new id, if any.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    table: &WeightedIndex<f64>,
    config: &SimConfig,
    schedule: &mut SpawnSchedule,
    now_ms: f64,
) -> Option<TargetId> {
    if now_ms - schedule.last_attempt_ms <= config.spawn_interval_ms {
        return None;
    }
    schedule.last_attempt_ms = now_ms;

    let live = world.query::<&Target>().iter().count();
    if live >= config.max_targets || !rng.gen_bool(config.spawn_probability) {
        return None;
    }

    let id = schedule.allocate_id();
    world_setup::spawn_random_target(world, rng, table, id);
    tracing::trace!(target = %id, "vessel spawned");
    Some(id)
}
