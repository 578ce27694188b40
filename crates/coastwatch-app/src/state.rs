//! State shared between the frame loop thread and its controller.

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use coastwatch_core::events::LogEvent;
use coastwatch_core::state::{SimSnapshot, StatsSnapshot};

use crate::error::AppError;

/// Commands sent to the frame loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopCommand {
    /// Change simulated ms per wall-clock ms.
    SetTimeScale { scale: f64 },
    /// Stop advancing; the loop keeps draining commands.
    Pause,
    Resume,
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Console syntax: `pause`, `resume`, `scale <x>` (or `speed <x>`), `quit`.
impl FromStr for LoopCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match (words.next(), words.next(), words.next()) {
            (Some("pause"), None, _) => LoopCommand::Pause,
            (Some("resume"), None, _) => LoopCommand::Resume,
            (Some("quit" | "exit" | "shutdown"), None, _) => LoopCommand::Shutdown,
            (Some("scale" | "speed"), Some(value), None) => {
                let scale: f64 = value
                    .parse()
                    .map_err(|_| AppError::Driver(format!("`{value}` is not a time scale")))?;
                if !scale.is_finite() {
                    return Err(AppError::Driver(format!("`{value}` is not a time scale")));
                }
                LoopCommand::SetTimeScale { scale }
            }
            _ => {
                return Err(AppError::Driver(format!(
                    "unknown command `{}` (pause, resume, scale <x>, quit)",
                    line.trim()
                )))
            }
        };
        Ok(command)
    }
}

/// Bounded tactical log for display, newest entry first.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    capacity: usize,
    entries: VecDeque<LogEvent>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, event: LogEvent) {
        self.entries.push_front(event);
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEvent> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&LogEvent> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a UI would draw: the log, the latest stats, and the world.
#[derive(Debug, Clone)]
pub struct DisplayState {
    pub log: LogBuffer,
    /// Replaced on each publication.
    pub stats: Option<StatsSnapshot>,
    pub snapshot: Option<SimSnapshot>,
    pub locks: u32,
    pub kills: u32,
}

impl DisplayState {
    pub fn new(log_capacity: usize) -> Self {
        Self {
            log: LogBuffer::new(log_capacity),
            stats: None,
            snapshot: None,
            locks: 0,
            kills: 0,
        }
    }
}

pub type SharedDisplay = Arc<Mutex<DisplayState>>;

pub fn shared_display(log_capacity: usize) -> SharedDisplay {
    Arc::new(Mutex::new(DisplayState::new(log_capacity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coastwatch_core::enums::Severity;

    fn entry(id: u64) -> LogEvent {
        LogEvent {
            id,
            timestamp_ms: id as f64 * 16.0,
            message: format!("entry {id}"),
            severity: Severity::Info,
        }
    }

    #[test]
    fn test_log_buffer_keeps_newest_first() {
        let mut log = LogBuffer::new(50);
        for id in 1..=60 {
            log.push(entry(id));
        }
        assert_eq!(log.len(), 50);
        assert_eq!(log.newest().map(|e| e.id), Some(60));
        let ids: Vec<u64> = log.iter().map(|e| e.id).collect();
        assert_eq!(ids.first(), Some(&60));
        assert_eq!(ids.last(), Some(&11));
    }

    #[test]
    fn test_parse_console_commands() {
        assert_eq!("pause".parse::<LoopCommand>().unwrap(), LoopCommand::Pause);
        assert_eq!("  resume ".parse::<LoopCommand>().unwrap(), LoopCommand::Resume);
        assert_eq!("quit".parse::<LoopCommand>().unwrap(), LoopCommand::Shutdown);
        assert_eq!(
            "scale 4".parse::<LoopCommand>().unwrap(),
            LoopCommand::SetTimeScale { scale: 4.0 }
        );
        assert_eq!(
            "speed 0.5".parse::<LoopCommand>().unwrap(),
            LoopCommand::SetTimeScale { scale: 0.5 }
        );

        for bad in ["", "jump", "scale", "scale fast", "scale inf", "pause now", "scale 2 3"] {
            assert!(
                matches!(bad.parse::<LoopCommand>(), Err(AppError::Driver(_))),
                "{bad:?} parsed"
            );
        }
    }

    #[test]
    fn test_display_state_creation() {
        let display = shared_display(10);
        let state = display.lock().unwrap();
        assert!(state.log.is_empty());
        assert!(state.stats.is_none());
        assert!(state.snapshot.is_none());
    }
}
