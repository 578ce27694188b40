//! Simulation engine for Coastwatch.
//!
//! Owns the hecs ECS world, advances it by host-supplied deltas,
//! and reports log entries, audio cues, and statistics to the host.

pub mod clock;
pub mod config;
pub mod engine;
pub mod guidance;
pub mod ledger;
pub mod outbox;
pub mod sink;
pub mod systems;
pub mod world_setup;

pub use coastwatch_core as core;
pub use config::{ConfigError, SimConfig, SpawnWeights};
pub use engine::SimulationEngine;
pub use outbox::TickReport;
pub use sink::{EventSink, NullSink};
