//! Cleanup system: removes vessels that have left the arena.

use hecs::{Entity, World};

use coastwatch_core::components::{Kinematics, Target};
use coastwatch_core::constants::*;
use coastwatch_core::types::Vec2;

/// Whether a position lies beyond the cull margin around the arena.
pub fn out_of_bounds(position: Vec2) -> bool {
    position.x < -ARENA_CULL_MARGIN
        || position.x > ARENA_WIDTH + ARENA_CULL_MARGIN
        || position.y < -ARENA_CULL_MARGIN
        || position.y > ARENA_HEIGHT + ARENA_CULL_MARGIN
}

/// Despawn vessels outside the arena margin.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_target, kinematics)) in world.query_mut::<(&Target, &Kinematics)>() {
        if out_of_bounds(kinematics.position) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
