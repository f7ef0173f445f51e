//! Walk observer trait for progress reporting and data collection.

use dw_map::TrajectoryStore;

/// Callbacks invoked by [`Walk::run`][crate::Walk::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — jump counter
///
/// ```rust,ignore
/// struct JumpCounter(usize);
///
/// impl WalkObserver for JumpCounter {
///     fn on_step_end(&mut self, _step: u64, jumps: usize) {
///         self.0 += jumps;
///     }
/// }
/// ```
pub trait WalkObserver {
    /// Called at the very start of each step, before any walker moves.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called after every walker has moved.
    ///
    /// `jumps` is the number of walkers whose step this round was a wrap or
    /// teleport.
    fn on_step_end(&mut self, _step: u64, _jumps: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_steps`
    /// steps) with read-only access to every trajectory.
    fn on_snapshot(&mut self, _step: u64, _store: &TrajectoryStore) {}

    /// Called once after the final step completes.
    fn on_walk_end(&mut self, _steps: u64, _store: &TrajectoryStore) {}
}

/// A [`WalkObserver`] that does nothing.
pub struct NoopObserver;

impl WalkObserver for NoopObserver {}
