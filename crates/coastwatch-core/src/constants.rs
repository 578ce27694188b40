//! Simulation constants and tuning parameters.
//!
//! Distances are abstract arena units (one unit renders as one pixel and is
//! reported as 10 m in log messages). Speeds are units per 100 ms of simulated
//! time; turn rates are radians per tick.

// --- Time scale ---

/// Distance moved per tick is `speed * delta_ms * SPEED_SCALE`.
pub const SPEED_SCALE: f64 = 0.01;

/// Milliseconds per second.
pub const MS_PER_SEC: f64 = 1000.0;

/// Metres reported per arena unit in log messages.
pub const METRES_PER_UNIT: f64 = 10.0;

// --- Arena ---

/// Arena width (units).
pub const ARENA_WIDTH: f64 = 900.0;

/// Arena height (units).
pub const ARENA_HEIGHT: f64 = 800.0;

/// Targets further than this beyond any arena edge are removed.
pub const ARENA_CULL_MARGIN: f64 = 100.0;

/// Base (launch pad and charging station) position.
pub const BASE_X: f64 = 80.0;
pub const BASE_Y: f64 = 300.0;

/// Vertical spacing between parking slots at the base.
pub const BASE_SLOT_SPACING: f64 = 20.0;

// --- Coastal no-go zone ---

/// Targets west of this line steer toward the escape heading.
pub const COAST_ZONE_X: f64 = 180.0;

/// Targets north of this line (smaller y) escape at +π/4, others at −π/4.
pub const COAST_SPLIT_Y: f64 = BASE_Y;

/// Escape heading magnitude (radians).
pub const COAST_ESCAPE_HEADING: f64 = std::f64::consts::FRAC_PI_4;

/// Coastal steering rate (rad/tick).
pub const COAST_TURN_RATE: f64 = 0.02;

// --- Target generation ---

/// Maximum number of concurrent targets.
pub const MAX_TARGETS: usize = 12;

/// Minimum simulated time between spawn attempts (ms).
pub const SPAWN_INTERVAL_MS: f64 = 2000.0;

/// Probability that a spawn attempt produces a target.
pub const SPAWN_PROBABILITY: f64 = 0.7;

/// Default type weights: FRIENDLY, ENEMY, FISHING, UNKNOWN.
pub const DEFAULT_SPAWN_WEIGHTS: [f64; 4] = [0.30, 0.45, 0.20, 0.05];

/// Distance outside the arena at which targets appear.
pub const SPAWN_EDGE_OFFSET: f64 = 50.0;

/// Cumulative edge probabilities: right edge 40 %, top-right 30 %, bottom-right 30 %.
pub const SPAWN_EDGE_RIGHT: f64 = 0.4;
pub const SPAWN_EDGE_TOP: f64 = 0.7;

/// Heading spread around the inward direction (±22.5°).
pub const SPAWN_HEADING_SPREAD: f64 = std::f64::consts::FRAC_PI_8;

/// Speed range for ENEMY vessels.
pub const ENEMY_SPEED_MIN: f64 = 8.0;
pub const ENEMY_SPEED_MAX: f64 = 10.0;

/// Speed range for every other vessel type.
pub const VESSEL_SPEED_MIN: f64 = 3.0;
pub const VESSEL_SPEED_MAX: f64 = 7.0;

// --- Weather ---

/// Minimum simulated time between weather rolls (ms).
pub const WEATHER_INTERVAL_MS: f64 = 30_000.0;

/// Probability that a weather roll draws a new value.
pub const WEATHER_CHANGE_PROBABILITY: f64 = 0.5;

// --- Patrol drones ---

/// Number of patrol drones.
pub const DRONE_COUNT: usize = 4;

/// Patrol sectors, each a looping waypoint polygon shared by two drones.
pub const PATROL_SECTORS: [[[f64; 2]; 4]; 2] = [
    [[250.0, 100.0], [800.0, 100.0], [800.0, 250.0], [250.0, 250.0]],
    [[250.0, 550.0], [800.0, 550.0], [800.0, 700.0], [250.0, 700.0]],
];

/// Waypoint arrival radius.
pub const WAYPOINT_ARRIVAL_RADIUS: f64 = 20.0;

/// Nominal patrol speed.
pub const PATROL_SPEED: f64 = 5.0;

/// Maximum return-to-base speed.
pub const RETURN_SPEED: f64 = 10.0;

/// Turn rate bounds per state (rad/tick).
pub const PATROL_TURN_RATE: f64 = 0.04;
pub const TRACKING_TURN_RATE: f64 = 0.06;
pub const RETURN_TURN_RATE: f64 = 0.05;

/// Below this range a tracking drone orbits instead of closing.
pub const ORBIT_RANGE: f64 = 100.0;

/// Base arrival radius for landing.
pub const BASE_ARRIVAL_RADIUS: f64 = 10.0;

// --- Battery ---

/// Full charge (percent).
pub const BATTERY_FULL: f64 = 100.0;

/// IDLE drones launch once charged to at least this level.
pub const BATTERY_READY: f64 = 95.0;

/// Below this level a drone is derated.
pub const BATTERY_LOW_POWER: f64 = 20.0;

/// Absolute floor that forces a return.
pub const BATTERY_RETURN_FLOOR: f64 = 15.0;

/// Margin added to the computed return reserve.
pub const BATTERY_RETURN_MARGIN: f64 = 5.0;

/// Recharge rate while IDLE (percent per second).
pub const RECHARGE_RATE: f64 = 15.0;

/// Drain rates per state (percent per second, before the weather multiplier).
pub const PATROL_DRAIN_RATE: f64 = 0.5;
pub const TRACKING_DRAIN_RATE: f64 = 1.5;
pub const RETURN_DRAIN_RATE: f64 = 0.8;

/// Low-power speed derating.
pub const LOW_POWER_SPEED_FACTOR: f64 = 0.6;

/// Low-power turn-rate derating.
pub const LOW_POWER_TURN_FACTOR: f64 = 0.5;

// --- Lock and interception ---

/// Continuous tracking time required for a lock (ms).
pub const LOCK_THRESHOLD_MS: f64 = 1000.0;

/// Attack drone speed (not affected by weather).
pub const ATTACK_DRONE_SPEED: f64 = 15.0;

/// Attack drone turn rate (rad/tick, not affected by weather).
pub const ATTACK_TURN_RATE: f64 = 0.1;

/// Collision radius against the actual target position.
pub const ATTACK_LETHAL_RADIUS: f64 = 15.0;

// --- Statistics ---

/// Minimum simulated time between statistics snapshots (ms).
pub const STATS_INTERVAL_MS: f64 = 500.0;

/// Display log buffer size used by collaborators.
pub const LOG_DISPLAY_CAPACITY: usize = 50;
