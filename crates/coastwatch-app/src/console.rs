//! Console sink: feeds the display state and reports statistics.

use coastwatch_core::events::LogEvent;
use coastwatch_core::state::StatsSnapshot;
use coastwatch_sim::EventSink;

use crate::state::SharedDisplay;

/// Receives engine notifications on the loop thread.
///
/// Log lines reach the terminal through the engine's `tracing` mirror; this
/// sink only keeps the display copy.
pub struct ConsoleSink {
    display: SharedDisplay,
}

impl ConsoleSink {
    pub fn new(display: SharedDisplay) -> Self {
        Self { display }
    }
}

impl EventSink for ConsoleSink {
    fn emit_log(&mut self, event: &LogEvent) {
        if let Ok(mut display) = self.display.lock() {
            display.log.push(event.clone());
        }
    }

    fn emit_stats(&mut self, stats: &StatsSnapshot) {
        tracing::debug!(
            target: "coastwatch::stats",
            friendly = stats.friendly,
            enemy = stats.enemy,
            fishing = stats.fishing,
            unknown = stats.unknown,
            weather = stats.weather.label(),
            "stats"
        );
        if let Ok(mut display) = self.display.lock() {
            display.stats = Some(*stats);
        }
    }

    fn on_lock_acquired(&mut self) {
        if let Ok(mut display) = self.display.lock() {
            display.locks += 1;
        }
    }

    fn on_target_destroyed(&mut self) {
        if let Ok(mut display) = self.display.lock() {
            display.kills += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shared_display;
    use coastwatch_core::enums::{Severity, Weather};

    #[test]
    fn test_sink_updates_display() {
        let display = shared_display(2);
        let mut sink = ConsoleSink::new(display.clone());
        for id in 1..=3 {
            sink.emit_log(&LogEvent {
                id,
                timestamp_ms: 0.0,
                message: String::new(),
                severity: Severity::Info,
            });
        }
        sink.emit_stats(&StatsSnapshot {
            enemy: 2,
            weather: Weather::Rain,
            ..Default::default()
        });
        sink.emit_stats(&StatsSnapshot {
            enemy: 1,
            ..Default::default()
        });
        sink.on_lock_acquired();

        let state = display.lock().unwrap();
        assert_eq!(state.log.len(), 2);
        assert_eq!(state.log.newest().map(|e| e.id), Some(3));
        assert_eq!(state.stats.map(|s| s.enemy), Some(1), "stats are replaced");
        assert_eq!(state.locks, 1);
        assert_eq!(state.kills, 0);
    }
}
