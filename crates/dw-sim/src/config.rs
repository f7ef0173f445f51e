//! Run configuration.

/// Top-level walk configuration.
///
/// Typically filled in from command-line arguments by the application and
/// passed to [`WalkBuilder`][crate::WalkBuilder].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkConfig {
    /// Master RNG seed.  The same seed always produces identical trajectories.
    pub seed: u64,

    /// Steps every walker takes in a full [`Walk::run`][crate::Walk::run].
    pub steps: u64,

    /// Call `on_snapshot` every N steps.  0 disables snapshots.
    pub snapshot_interval_steps: u64,
}

impl WalkConfig {
    pub fn new(seed: u64, steps: u64) -> Self {
        Self { seed, steps, snapshot_interval_steps: 0 }
    }

    #[inline]
    pub(crate) fn is_snapshot_step(&self, step: u64) -> bool {
        self.snapshot_interval_steps > 0 && step.is_multiple_of(self.snapshot_interval_steps)
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { seed: 0, steps: 100, snapshot_interval_steps: 0 }
    }
}
