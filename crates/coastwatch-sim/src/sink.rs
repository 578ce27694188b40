//! Host-facing event sink.

use coastwatch_core::events::{AudioCue, LogEvent};
use coastwatch_core::state::StatsSnapshot;

use crate::outbox::TickReport;

/// Receives the simulation's outward notifications.
pub trait EventSink {
    fn emit_log(&mut self, event: &LogEvent);

    fn emit_stats(&mut self, stats: &StatsSnapshot);

    fn on_lock_acquired(&mut self) {}

    fn on_target_destroyed(&mut self) {}
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit_log(&mut self, _event: &LogEvent) {}

    fn emit_stats(&mut self, _stats: &StatsSnapshot) {}
}

impl TickReport {
    /// Deliver logs, then statistics, then cues.
    pub fn dispatch(&self, sink: &mut dyn EventSink) {
        for event in &self.logs {
            sink.emit_log(event);
        }
        if let Some(stats) = &self.stats {
            sink.emit_stats(stats);
        }
        for cue in &self.cues {
            match cue {
                AudioCue::LockAcquired { .. } => sink.on_lock_acquired(),
                AudioCue::TargetDestroyed { .. } => sink.on_target_destroyed(),
            }
        }
    }
}
