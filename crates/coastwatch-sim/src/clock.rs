//! Frame clock: turns host timestamps into simulation deltas.

/// Tracks the previous frame timestamp. The first frame yields a zero delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call, in ms. Never negative.
    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        delta
    }

    /// Forget the previous timestamp, e.g. after a pause.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(12_345.0), 0.0);
        assert_eq!(clock.delta(12_361.0), 16.0);
    }

    #[test]
    fn test_backwards_timestamp_clamps() {
        let mut clock = FrameClock::new();
        clock.delta(100.0);
        assert_eq!(clock.delta(90.0), 0.0);
        assert_eq!(clock.delta(100.0), 10.0);
    }

    #[test]
    fn test_reset_restarts() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        clock.reset();
        assert_eq!(clock.delta(5_000.0), 0.0);
    }
}
