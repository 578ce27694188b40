//! Statistics: live vessel counts by kind plus weather.

use hecs::World;

use coastwatch_core::components::Target;
use coastwatch_core::enums::Weather;
use coastwatch_core::state::StatsSnapshot;

/// Count live vessels.
pub fn collect(world: &World, weather: Weather) -> StatsSnapshot {
    let mut stats = StatsSnapshot {
        weather,
        ..Default::default()
    };
    for (_, target) in world.query::<&Target>().iter() {
        stats.record(target.kind);
    }
    stats
}

/// Publish at most once per interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsThrottle {
    last_published_ms: f64,
}

impl StatsThrottle {
    pub fn due(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        if now_ms - self.last_published_ms > interval_ms {
            self.last_published_ms = now_ms;
            true
        } else {
            false
        }
    }
}
