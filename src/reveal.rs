//! Latching visibility state for scroll-revealed content blocks.
//!
//! The controller tracks one latch per registered target: the first
//! intersection update whose ratio reaches the target's threshold flips the
//! latch and reports it, every later update is ignored. The DOM wiring lives
//! in `components::reveal`; this module has no web dependency so the latch
//! semantics are testable on any target.

use std::collections::HashMap;

/// Identifies a registered target. Stale handles are harmless: every
/// operation on an unregistered handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealHandle(u64);

#[derive(Debug)]
struct RevealTarget {
    threshold: f64,
    revealed: bool,
}

#[derive(Debug, Default)]
pub struct RevealController {
    targets: HashMap<u64, RevealTarget>,
    next_id: u64,
    degraded: bool,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller for environments without viewport observation. Targets
    /// register already revealed, so content never stays hidden just
    /// because the watch could not be installed.
    pub fn degraded() -> Self {
        Self {
            degraded: true,
            ..Self::default()
        }
    }

    /// Starts watching a new target. `threshold` is the fraction of the
    /// target that must be visible before it reveals, clamped to [0, 1].
    pub fn register(&mut self, threshold: f64) -> RevealHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.targets.insert(
            id,
            RevealTarget {
                threshold: threshold.clamp(0.0, 1.0),
                revealed: self.degraded,
            },
        );
        RevealHandle(id)
    }

    /// Stops watching a target. Safe to call any number of times.
    pub fn unregister(&mut self, handle: RevealHandle) {
        self.targets.remove(&handle.0);
    }

    /// Feeds one intersection update for `handle`. Returns `true` exactly
    /// once per target: the first time `ratio` reaches its threshold while
    /// it is still hidden. The latch never resets, so scrolling away and
    /// back cannot re-trigger the transition.
    pub fn update(&mut self, handle: RevealHandle, ratio: f64) -> bool {
        match self.targets.get_mut(&handle.0) {
            Some(target) if !target.revealed && ratio >= target.threshold => {
                target.revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, handle: RevealHandle) -> bool {
        self.targets.get(&handle.0).map_or(false, |t| t.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_latches_once() {
        let mut controller = RevealController::new();
        let handle = controller.register(0.15);
        assert!(!controller.is_revealed(handle));

        assert!(controller.update(handle, 0.2));
        assert!(controller.is_revealed(handle));

        // Further updates above the threshold stay silent.
        assert!(!controller.update(handle, 0.9));
        assert!(!controller.update(handle, 1.0));
        assert!(controller.is_revealed(handle));
    }

    #[test]
    fn never_reverts_after_scrolling_away() {
        let mut controller = RevealController::new();
        let handle = controller.register(0.5);
        assert!(controller.update(handle, 0.75));
        assert!(!controller.update(handle, 0.0));
        assert!(controller.is_revealed(handle));
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let mut controller = RevealController::new();
        let handle = controller.register(0.15);
        for ratio in [0.0, 0.05, 0.1, 0.149] {
            assert!(!controller.update(handle, ratio));
        }
        assert!(!controller.is_revealed(handle));
    }

    #[test]
    fn reveals_on_third_update_of_ratio_sequence() {
        let mut controller = RevealController::new();
        let handle = controller.register(0.15);

        let notifications: Vec<bool> = [0.0, 0.05, 0.2, 0.05]
            .iter()
            .map(|&ratio| controller.update(handle, ratio))
            .collect();

        assert_eq!(notifications, vec![false, false, true, false]);
    }

    #[test]
    fn unregister_silences_further_updates() {
        let mut controller = RevealController::new();
        let handle = controller.register(0.1);
        controller.unregister(handle);
        assert!(!controller.update(handle, 1.0));
        assert!(!controller.is_revealed(handle));

        // Idempotent.
        controller.unregister(handle);
        controller.unregister(handle);
    }

    #[test]
    fn targets_are_independent() {
        let mut controller = RevealController::new();
        let first = controller.register(0.1);
        let second = controller.register(0.8);

        assert!(controller.update(first, 0.5));
        assert!(!controller.update(second, 0.5));
        assert!(controller.is_revealed(first));
        assert!(!controller.is_revealed(second));
    }

    #[test]
    fn degraded_controller_reveals_immediately() {
        let mut controller = RevealController::degraded();
        let first = controller.register(0.15);
        let second = controller.register(1.0);
        assert!(controller.is_revealed(first));
        assert!(controller.is_revealed(second));

        // Already revealed, so no notification ever fires.
        assert!(!controller.update(first, 1.0));
    }

    #[test]
    fn threshold_is_clamped() {
        let mut controller = RevealController::new();
        let high = controller.register(4.2);
        let low = controller.register(-1.0);

        // A clamped-high target reveals at full visibility.
        assert!(controller.update(high, 1.0));
        // A clamped-low target reveals on any update.
        assert!(controller.update(low, 0.0));
    }
}
