//! Actions scheduled for later delivery on the main loop.

use std::time::{Duration, Instant};

use crate::kernel::Action;

#[derive(Debug, Default)]
pub struct DeferredActions {
    pending: Vec<(Instant, Action)>,
}

impl DeferredActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, action: Action) {
        let due = now + delay;
        let at = self.pending.partition_point(|(t, _)| *t <= due);
        self.pending.insert(at, (due, action));
    }

    /// Removes and returns every action due at `now`, in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<Action> {
        let split = self.pending.partition_point(|(t, _)| *t <= now);
        self.pending
            .drain(..split)
            .map(|(_, action)| action)
            .collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/deferred.rs"]
mod tests;
