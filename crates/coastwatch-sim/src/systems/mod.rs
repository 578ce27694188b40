//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! Cross-tick state they need (timers, ledger, id counters) is passed in by the engine.

pub mod cleanup;
pub mod intercept;
pub mod lock;
pub mod movement;
pub mod patrol;
pub mod snapshot;
pub mod stats;
pub mod target_spawner;
pub mod weather;
