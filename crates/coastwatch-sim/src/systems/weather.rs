//! Weather controller: occasional random changes on a fixed cadence.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use coastwatch_core::enums::{Weather, WeatherEffects};

use crate::outbox::Outbox;

/// Current weather and when it was last rolled.
#[derive(Debug, Clone, Copy)]
pub struct WeatherController {
    current: Weather,
    last_roll_ms: f64,
}

impl WeatherController {
    pub fn new(initial: Weather) -> Self {
        Self {
            current: initial,
            last_roll_ms: 0.0,
        }
    }

    pub fn current(&self) -> Weather {
        self.current
    }

    pub fn effects(&self) -> WeatherEffects {
        self.current.effects()
    }

    pub fn set(&mut self, weather: Weather) {
        self.current = weather;
    }
}

/// Once per `interval_ms`, with probability `change_probability`, draw a new
/// weather uniformly. Only an actual change is logged; storms log as warnings.
pub fn run(
    controller: &mut WeatherController,
    rng: &mut ChaCha8Rng,
    now_ms: f64,
    interval_ms: f64,
    change_probability: f64,
    outbox: &mut Outbox,
) {
    if now_ms - controller.last_roll_ms <= interval_ms {
        return;
    }
    controller.last_roll_ms = now_ms;

    if !rng.gen_bool(change_probability) {
        return;
    }
    let Some(&next) = Weather::ALL.choose(rng) else {
        return;
    };
    if next == controller.current {
        return;
    }

    controller.current = next;
    tracing::debug!(weather = next.label(), "weather changed");
    let effects = next.effects();
    let message = format!(
        "Weather changed to {}. Detection range {:.0} m, drone speed {:.0}%.",
        next.label(),
        effects.detection_range * coastwatch_core::constants::METRES_PER_UNIT,
        effects.speed_multiplier * 100.0,
    );
    if next == Weather::Storm {
        outbox.warning(message);
    } else {
        outbox.info(message);
    }
}
