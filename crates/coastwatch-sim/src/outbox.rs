//! Per-tick collection of log entries and audio cues.
//!
//! Every log entry is mirrored to `tracing` at a level matching its severity,
//! so a headless run reads the same tactical log on stderr.

use serde::Serialize;

use coastwatch_core::enums::Severity;
use coastwatch_core::events::{AudioCue, LogEvent};
use coastwatch_core::state::StatsSnapshot;
use coastwatch_core::types::SimTime;

/// Everything the host needs to hear about from one `advance`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickReport {
    /// Simulation time after the advance.
    pub time: SimTime,
    /// New log entries, oldest first.
    pub logs: Vec<LogEvent>,
    pub cues: Vec<AudioCue>,
    /// Present when the statistics interval elapsed this tick.
    pub stats: Option<StatsSnapshot>,
}

impl TickReport {
    pub fn empty(time: SimTime) -> Self {
        Self {
            time,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty() && self.cues.is_empty() && self.stats.is_none()
    }
}

/// Accumulates log entries and cues while systems run.
#[derive(Debug, Default)]
pub struct Outbox {
    next_log_id: u64,
    now_ms: f64,
    logs: Vec<LogEvent>,
    cues: Vec<AudioCue>,
}

impl Outbox {
    /// Start collecting for a tick whose entries are stamped `now_ms`.
    pub fn begin(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        self.logs.clear();
        self.cues.clear();
    }

    pub fn log(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Info => tracing::info!(target: "coastwatch::log", t_ms = self.now_ms, "{message}"),
            Severity::Warning => tracing::warn!(target: "coastwatch::log", t_ms = self.now_ms, "{message}"),
            Severity::Alert => {
                tracing::warn!(target: "coastwatch::log", t_ms = self.now_ms, alert = true, "{message}")
            }
        }

        self.next_log_id += 1;
        self.logs.push(LogEvent {
            id: self.next_log_id,
            timestamp_ms: self.now_ms,
            message,
            severity,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.log(Severity::Alert, message);
    }

    pub fn cue(&mut self, cue: AudioCue) {
        tracing::debug!(?cue, "audio cue");
        self.cues.push(cue);
    }

    /// Hand the collected entries to a report.
    pub fn finish(&mut self, time: SimTime, stats: Option<StatsSnapshot>) -> TickReport {
        TickReport {
            time,
            logs: std::mem::take(&mut self.logs),
            cues: std::mem::take(&mut self.cues),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_across_ticks() {
        let mut outbox = Outbox::default();
        outbox.begin(16.0);
        outbox.info("a");
        outbox.alert("b");
        let first = outbox.finish(SimTime::default(), None);

        outbox.begin(32.0);
        outbox.warning("c");
        let second = outbox.finish(SimTime::default(), None);

        let ids: Vec<u64> = first.logs.iter().chain(&second.logs).map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(first.logs[1].severity, Severity::Alert);
        assert_eq!(second.logs[0].timestamp_ms, 32.0);
    }

    #[test]
    fn test_finish_drains() {
        let mut outbox = Outbox::default();
        outbox.begin(0.0);
        outbox.cue(AudioCue::LockAcquired {
            target: coastwatch_core::types::TargetId(1),
        });
        assert_eq!(outbox.finish(SimTime::default(), None).cues.len(), 1);
        assert!(outbox.finish(SimTime::default(), None).is_empty());
    }
}
