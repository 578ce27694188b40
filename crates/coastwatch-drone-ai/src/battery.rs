//! Percentage battery model.
//!
//! Drones drain at a state-dependent rate scaled by weather and recharge while
//! parked. The return reserve is sized for the low-power derated return speed
//! under the current weather, so a drone that crosses into low power on the
//! way home still makes it.

use coastwatch_core::constants::*;
use coastwatch_core::enums::{DroneState, WeatherEffects};

/// Drain rate for a state in percent per second, before the weather multiplier.
pub fn drain_rate(state: DroneState) -> f64 {
    match state {
        DroneState::Idle => 0.0,
        DroneState::Patrol => PATROL_DRAIN_RATE,
        DroneState::Tracking => TRACKING_DRAIN_RATE,
        DroneState::Returning => RETURN_DRAIN_RATE,
    }
}

/// Battery after `delta_ms` of flight in `state`.
pub fn drain(battery: f64, state: DroneState, effects: &WeatherEffects, delta_ms: f64) -> f64 {
    let rate = drain_rate(state) * effects.drain_multiplier;
    (battery - rate * delta_ms / MS_PER_SEC).max(0.0)
}

/// Battery after `delta_ms` parked at the base.
pub fn recharge(battery: f64, delta_ms: f64) -> f64 {
    (battery + RECHARGE_RATE * delta_ms / MS_PER_SEC).min(BATTERY_FULL)
}

pub fn is_low_power(battery: f64) -> bool {
    battery < BATTERY_LOW_POWER
}

/// Speed multiplier from battery level and weather.
pub fn speed_factor(battery: f64, effects: &WeatherEffects) -> f64 {
    let derate = if is_low_power(battery) {
        LOW_POWER_SPEED_FACTOR
    } else {
        1.0
    };
    derate * effects.speed_multiplier
}

/// Turn-rate multiplier from battery level and weather.
pub fn turn_factor(battery: f64, effects: &WeatherEffects) -> f64 {
    let derate = if is_low_power(battery) {
        LOW_POWER_TURN_FACTOR
    } else {
        1.0
    };
    derate * effects.speed_multiplier
}

/// Battery needed to fly `distance_to_base` home at the derated return speed.
pub fn return_reserve(distance_to_base: f64, effects: &WeatherEffects) -> f64 {
    let worst_speed = RETURN_SPEED * LOW_POWER_SPEED_FACTOR * effects.speed_multiplier;
    let units_per_sec = worst_speed * SPEED_SCALE * MS_PER_SEC;
    let secs_to_base = distance_to_base / units_per_sec;
    secs_to_base * RETURN_DRAIN_RATE * effects.drain_multiplier
}

/// Whether an airborne drone must break off and head home.
pub fn must_return(battery: f64, distance_to_base: f64, effects: &WeatherEffects) -> bool {
    battery < return_reserve(distance_to_base, effects) + BATTERY_RETURN_MARGIN
        || battery <= BATTERY_RETURN_FLOOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use coastwatch_core::enums::Weather;

    #[test]
    fn test_storm_doubles_drain() {
        let clear = Weather::Clear.effects();
        let storm = Weather::Storm.effects();
        let a = drain(80.0, DroneState::Tracking, &clear, 1000.0);
        let b = drain(80.0, DroneState::Tracking, &storm, 1000.0);
        assert!((80.0 - a - 1.5).abs() < 1e-9);
        assert!((80.0 - b - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_drain_never_negative() {
        let storm = Weather::Storm.effects();
        assert_eq!(drain(0.5, DroneState::Tracking, &storm, 10_000.0), 0.0);
    }

    #[test]
    fn test_recharge_caps_at_full() {
        assert!((recharge(50.0, 1000.0) - 65.0).abs() < 1e-9);
        assert_eq!(recharge(99.0, 1000.0), BATTERY_FULL);
    }

    #[test]
    fn test_low_power_derating() {
        let clear = Weather::Clear.effects();
        assert_eq!(speed_factor(50.0, &clear), 1.0);
        assert!((speed_factor(19.9, &clear) - 0.6).abs() < 1e-12);
        assert!((turn_factor(19.9, &clear) - 0.5).abs() < 1e-12);
        let storm = Weather::Storm.effects();
        assert!((turn_factor(19.9, &storm) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_reserve_grows_with_distance_and_weather() {
        let clear = Weather::Clear.effects();
        let storm = Weather::Storm.effects();
        assert_eq!(return_reserve(0.0, &clear), 0.0);
        // 600 units at 60 units/s worst case = 10 s * 0.8 %/s.
        assert!((return_reserve(600.0, &clear) - 8.0).abs() < 1e-9);
        assert!(return_reserve(600.0, &storm) > return_reserve(600.0, &clear) * 3.0);
    }

    #[test]
    fn test_must_return_floor_and_reserve() {
        let clear = Weather::Clear.effects();
        assert!(must_return(15.0, 0.0, &clear));
        assert!(!must_return(15.1, 0.0, &clear));
        // 1200 units: reserve 16 % plus 5 % margin.
        assert!(must_return(20.9, 1200.0, &clear));
        assert!(!must_return(21.1, 1200.0, &clear));
    }
}
