//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, advances it by host-supplied
//! deltas, and reports what happened as a `TickReport`. Completely headless
//! (no clock or I/O of its own), enabling deterministic testing.

use hecs::{Entity, World};
use rand::distributions::WeightedIndex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use coastwatch_core::enums::{Weather, WeatherEffects};
use coastwatch_core::state::{SimSnapshot, StatsSnapshot};
use coastwatch_core::types::SimTime;

use crate::config::{ConfigError, SimConfig};
use crate::ledger::TrackingLedger;
use crate::outbox::{Outbox, TickReport};
use crate::sink::EventSink;
use crate::systems;
use crate::systems::stats::StatsThrottle;
use crate::systems::target_spawner::SpawnSchedule;
use crate::systems::weather::WeatherController;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    spawn_table: WeightedIndex<f64>,
    weather: WeatherController,
    spawn_schedule: SpawnSchedule,
    stats_throttle: StatsThrottle,
    ledger: TrackingLedger,
    next_attack_id: u32,
    despawn_buffer: Vec<Entity>,
    outbox: Outbox,
}

impl SimulationEngine {
    /// Create a new engine with the initial fleet parked at the base.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawn_table = config.spawn_table()?;

        let mut world = World::new();
        world_setup::setup_fleet(&mut world);

        tracing::info!(
            seed = config.seed,
            weather = config.initial_weather.label(),
            "simulation initialized"
        );

        Ok(Self {
            world,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawn_table,
            weather: WeatherController::new(config.initial_weather),
            spawn_schedule: SpawnSchedule::default(),
            stats_throttle: StatsThrottle::default(),
            ledger: TrackingLedger::new(),
            next_attack_id: 0,
            despawn_buffer: Vec::new(),
            outbox: Outbox::default(),
            config,
        })
    }

    /// Advance the simulation by `delta_ms`. Non-positive or non-finite
    /// deltas change nothing and return an empty report.
    pub fn advance(&mut self, delta_ms: f64) -> TickReport {
        if !(delta_ms.is_finite() && delta_ms > 0.0) {
            return TickReport::empty(self.time);
        }

        let now_ms = self.time.elapsed_ms + delta_ms;
        self.outbox.begin(now_ms);
        self.run_systems(now_ms, delta_ms);
        self.time.advance(delta_ms);

        let stats = self
            .stats_throttle
            .due(now_ms, self.config.stats_interval_ms)
            .then(|| self.stats());
        self.outbox.finish(self.time, stats)
    }

    /// Advance and deliver the report to `sink`.
    pub fn advance_into(&mut self, delta_ms: f64, sink: &mut dyn EventSink) -> TickReport {
        let report = self.advance(delta_ms);
        report.dispatch(sink);
        report
    }

    /// Read-only view of the whole simulation.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.weather.current(),
            &self.ledger,
        )
    }

    /// Live vessel counts and weather, unthrottled.
    pub fn stats(&self) -> StatsSnapshot {
        systems::stats::collect(&self.world, self.weather.current())
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn weather(&self) -> Weather {
        self.weather.current()
    }

    pub fn effects(&self) -> WeatherEffects {
        self.weather.effects()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn ledger(&self) -> &TrackingLedger {
        &self.ledger
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scenario setup in tests.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn set_weather(&mut self, weather: Weather) {
        self.weather.set(weather);
    }

    /// Spawn a vessel with explicit kinematics, using the engine's id sequence.
    #[cfg(test)]
    pub fn spawn_test_target(
        &mut self,
        kind: coastwatch_core::enums::TargetKind,
        position: coastwatch_core::types::Vec2,
        heading: f64,
        speed: f64,
    ) -> coastwatch_core::types::TargetId {
        let id = self.spawn_schedule.allocate_id();
        world_setup::spawn_target(&mut self.world, id, kind, position, heading, speed);
        id
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now_ms: f64, delta_ms: f64) {
        // 1. Weather
        systems::weather::run(
            &mut self.weather,
            &mut self.rng,
            now_ms,
            self.config.weather_interval_ms,
            self.config.weather_change_probability,
            &mut self.outbox,
        );
        let effects = self.weather.effects();
        // 2. Spawning
        systems::target_spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.spawn_table,
            &self.config,
            &mut self.spawn_schedule,
            now_ms,
        );
        // 3. Vessel movement, then cull what left the arena
        systems::movement::run(&mut self.world, delta_ms);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 4. Patrol drones, sequentially by slot
        systems::patrol::run(&mut self.world, effects, delta_ms, &mut self.outbox);
        // 5. Tracking ledger and lock
        systems::lock::run(
            &mut self.world,
            &mut self.ledger,
            &mut self.next_attack_id,
            delta_ms,
            &mut self.outbox,
        );
        // 6. Attack drones
        systems::intercept::run(
            &mut self.world,
            &self.ledger,
            delta_ms,
            &mut self.despawn_buffer,
            &mut self.outbox,
        );
    }
}
