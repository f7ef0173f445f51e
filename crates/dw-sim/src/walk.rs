//! The `Walk` struct and its step loop.

use std::sync::Arc;

use dw_core::{AgentId, AgentRng};
use dw_map::{Boundary, MapEngine};
use dw_policy::{PolicyKind, StepPolicy};
use tracing::{info, warn};

use crate::{SimError, SimResult, WalkConfig, WalkObserver};

/// The main walk runner.
///
/// Holds the map engine and one [`AgentRng`] per walker.  Walkers are
/// advanced in ascending `AgentId` order each step; because every walker
/// draws from its own generator, that order never affects a trajectory.
///
/// Create via [`WalkBuilder`][crate::WalkBuilder].
pub struct Walk<B: Boundary> {
    /// Run configuration (seed, step count, snapshot interval).
    pub config: WalkConfig,

    /// The map and every trajectory recorded so far.
    map: MapEngine<B>,

    /// Per-walker RNGs, indexed by `AgentId`.  Always `map.len()` long.
    rngs: Vec<AgentRng>,

    /// Steps completed so far.
    step: u64,
}

impl<B: Boundary> Walk<B> {
    pub(crate) fn new(config: WalkConfig, map: MapEngine<B>, rngs: Vec<AgentRng>) -> Self {
        Self { config, map, rngs, step: 0 }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `config.steps`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: WalkObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.step < self.config.steps {
            self.run_one(observer)?;
        }
        info!(map = self.map.name(), steps = self.step, "walk finished");
        observer.on_walk_end(self.step, self.map.store());
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores
    /// `config.steps`).  Useful for tests and incremental stepping.
    pub fn run_steps<O: WalkObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.run_one(observer)?;
        }
        Ok(())
    }

    /// Add a walker of a built-in kind mid-walk.  It starts on the map's
    /// start point and moves from the next step on.
    pub fn register(&mut self, kind: PolicyKind, display_name: Option<String>) -> AgentId {
        self.register_policy(kind.build(), display_name)
    }

    /// Add a walker bound to `policy` mid-walk, seeding its RNG the same way
    /// [`WalkBuilder::build`][crate::WalkBuilder::build] does.
    pub fn register_policy(
        &mut self,
        policy:       Arc<dyn StepPolicy>,
        display_name: Option<String>,
    ) -> AgentId {
        let id = self.map.register_policy(policy, display_name);
        self.rngs.push(AgentRng::new(self.config.seed, id));
        id
    }

    /// The map and every trajectory recorded so far.
    #[inline]
    pub fn map(&self) -> &MapEngine<B> {
        &self.map
    }

    /// Steps completed so far.
    #[inline]
    pub fn steps_done(&self) -> u64 {
        self.step
    }

    /// Hand back the map once the walk is over.
    pub fn into_map(self) -> MapEngine<B> {
        self.map
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn run_one<O: WalkObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.step;
        observer.on_step_start(now);
        let jumps = self.process_step(now)?;
        observer.on_step_end(now, jumps);
        if self.config.is_snapshot_step(now) {
            observer.on_snapshot(now, self.map.store());
        }
        self.step += 1;
        Ok(())
    }

    /// Advance every walker once; returns how many of them jumped.
    fn process_step(&mut self, now: u64) -> SimResult<usize> {
        let mut jumps = 0;
        for (i, rng) in self.rngs.iter_mut().enumerate() {
            let agent = AgentId(i as u32);
            match self.map.advance(agent, rng) {
                Ok(landing) => jumps += usize::from(landing.is_jump()),
                Err(source) => {
                    warn!(step = now, %agent, error = %source, "walker cannot move; stopping walk");
                    return Err(SimError::Step { step: now, source });
                }
            }
        }
        Ok(jumps)
    }
}
