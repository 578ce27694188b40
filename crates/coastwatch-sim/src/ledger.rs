//! Tracking ledger: continuous tracking time per target and lock state.

use std::collections::{BTreeMap, BTreeSet};

use coastwatch_core::constants::LOCK_THRESHOLD_MS;
use coastwatch_core::types::TargetId;

/// Accumulated tracking time for every currently tracked target.
///
/// An entry exists exactly while some drone is TRACKING the target. Losing the
/// track drops both the time and the lock, so a re-acquired target needs a
/// fresh threshold before another attack drone launches.
#[derive(Debug, Clone, Default)]
pub struct TrackingLedger {
    durations: BTreeMap<TargetId, f64>,
    locked: BTreeSet<TargetId>,
}

impl TrackingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accrue `delta_ms` for every tracked target and prune the rest.
    /// Returns targets that crossed the lock threshold this update, in id order.
    pub fn update(&mut self, tracked: &BTreeSet<TargetId>, delta_ms: f64) -> Vec<TargetId> {
        let mut newly_locked = Vec::new();

        for &id in tracked {
            let duration = self.durations.entry(id).or_insert(0.0);
            *duration += delta_ms;
            if *duration > LOCK_THRESHOLD_MS && self.locked.insert(id) {
                newly_locked.push(id);
            }
        }

        self.durations.retain(|id, _| tracked.contains(id));
        self.locked.retain(|id| tracked.contains(id));

        newly_locked
    }

    /// Continuous tracking time for a target, if it is tracked.
    pub fn duration(&self, id: TargetId) -> Option<f64> {
        self.durations.get(&id).copied()
    }

    pub fn is_tracked(&self, id: TargetId) -> bool {
        self.durations.contains_key(&id)
    }

    pub fn is_locked(&self, id: TargetId) -> bool {
        self.locked.contains(&id)
    }

    /// (target, duration, locked) in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetId, f64, bool)> + '_ {
        self.durations
            .iter()
            .map(|(&id, &duration)| (id, duration, self.locked.contains(&id)))
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u32]) -> BTreeSet<TargetId> {
        ids.iter().map(|&i| TargetId(i)).collect()
    }

    #[test]
    fn test_accrues_and_locks_once() {
        let mut ledger = TrackingLedger::new();
        let tracked = set(&[7]);

        let mut locks = Vec::new();
        for _ in 0..70 {
            locks.extend(ledger.update(&tracked, 16.0));
        }
        assert_eq!(locks, vec![TargetId(7)]);
        assert!(ledger.is_locked(TargetId(7)));
        assert!((ledger.duration(TargetId(7)).unwrap() - 1120.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut ledger = TrackingLedger::new();
        let tracked = set(&[1]);
        assert!(ledger.update(&tracked, 1000.0).is_empty());
        assert_eq!(ledger.update(&tracked, 0.5), vec![TargetId(1)]);
    }

    #[test]
    fn test_untracked_entries_pruned_and_unlocked() {
        let mut ledger = TrackingLedger::new();
        ledger.update(&set(&[1, 2]), 1500.0);
        assert!(ledger.is_locked(TargetId(1)));

        ledger.update(&set(&[2]), 16.0);
        assert_eq!(ledger.duration(TargetId(1)), None);
        assert!(!ledger.is_locked(TargetId(1)));
        assert_eq!(ledger.len(), 1);

        // Re-acquired: the clock restarts from zero.
        ledger.update(&set(&[1, 2]), 16.0);
        assert_eq!(ledger.duration(TargetId(1)), Some(16.0));
        assert!(!ledger.is_locked(TargetId(1)));
    }
}
