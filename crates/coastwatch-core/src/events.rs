//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Severity;
use crate::types::TargetId;

/// Side-channel cues for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    /// A target was locked and an attack drone launched.
    LockAcquired { target: TargetId },
    /// An attack drone destroyed its target.
    TargetDestroyed { target: TargetId },
}

/// Entry for the tactical log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub id: u64,
    /// Simulated time of emission (ms).
    pub timestamp_ms: f64,
    pub message: String,
    pub severity: Severity,
}
