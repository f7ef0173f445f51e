//! `LogObserver` — progress reporting through `tracing`.

use dw_map::TrajectoryStore;
use dw_sim::WalkObserver;
use tracing::info;

/// A [`WalkObserver`] that logs a progress line every `interval` steps and a
/// closing line with jump totals.
///
/// The running totals stay readable after the walk via
/// [`total_jumps`][Self::total_jumps] and [`steps`][Self::steps].
pub struct LogObserver {
    interval:    u64,
    total_jumps: usize,
    steps:       u64,
}

impl LogObserver {
    /// `interval == 0` logs only the closing line.
    pub fn new(interval: u64) -> Self {
        Self { interval, total_jumps: 0, steps: 0 }
    }

    pub fn total_jumps(&self) -> usize {
        self.total_jumps
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl WalkObserver for LogObserver {
    fn on_step_end(&mut self, step: u64, jumps: usize) {
        self.total_jumps += jumps;
        self.steps = step + 1;
        if self.interval > 0 && self.steps.is_multiple_of(self.interval) {
            info!(step = self.steps, jumps = self.total_jumps, "progress");
        }
    }

    fn on_walk_end(&mut self, steps: u64, store: &TrajectoryStore) {
        info!(
            steps,
            walkers = store.len(),
            jumps = self.total_jumps,
            "all walkers finished"
        );
    }
}
