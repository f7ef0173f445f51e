//! Fluent builder for constructing a [`Walk`].

use std::sync::Arc;

use dw_core::AgentRng;
use dw_map::{Boundary, Domain, DomainSpec, MapEngine};
use dw_policy::{PolicyKind, StepPolicy};
use tracing::{info, warn};

use crate::{SimError, SimResult, Walk, WalkConfig};

/// A batch of walkers sharing one policy instance and display name.
struct Cohort {
    policy: Arc<dyn StepPolicy>,
    count:  usize,
    name:   Option<String>,
}

/// Fluent builder for [`Walk<B>`].
///
/// Walkers are registered in the order their cohorts were added, so
/// `AgentId`s (and therefore RNG streams) are stable for a given builder
/// chain.
///
/// # Example
///
/// ```rust,ignore
/// let mut walk = WalkBuilder::new(config, Plane::new())
///     .agents(PolicyKind::FourDirections, 5)
///     .named_agents(PolicyKind::AnyDirection, 5, "Stumblers")
///     .build()?;
/// walk.run(&mut NoopObserver)?;
/// ```
pub struct WalkBuilder<B: Boundary> {
    config:  WalkConfig,
    map:     MapEngine<B>,
    cohorts: Vec<Cohort>,
}

impl<B: Boundary> WalkBuilder<B> {
    pub fn new(config: WalkConfig, boundary: B) -> Self {
        Self {
            config,
            map: MapEngine::new(boundary),
            cohorts: Vec::new(),
        }
    }

    /// Add `count` walkers of a built-in kind under its default name.
    pub fn agents(self, kind: PolicyKind, count: usize) -> Self {
        self.policy(kind.build(), count, None)
    }

    /// Add `count` walkers of a built-in kind under `name`.
    pub fn named_agents(self, kind: PolicyKind, count: usize, name: impl Into<String>) -> Self {
        self.policy(kind.build(), count, Some(name.into()))
    }

    /// Add `count` walkers sharing `policy`.
    pub fn policy(
        mut self,
        policy: Arc<dyn StepPolicy>,
        count:  usize,
        name:   Option<String>,
    ) -> Self {
        self.cohorts.push(Cohort { policy, count, name });
        self
    }

    /// Register every cohort, seed one RNG per walker, and return a
    /// ready-to-run [`Walk`].
    pub fn build(self) -> SimResult<Walk<B>> {
        let mut map = self.map;
        let total: usize = self.cohorts.iter().map(|c| c.count).sum();
        if u32::try_from(total).is_err() {
            return Err(SimError::Config(format!("{total} walkers exceeds the AgentId range")));
        }

        for cohort in self.cohorts {
            for _ in 0..cohort.count {
                map.register_policy(cohort.policy.clone(), cohort.name.clone());
            }
        }
        if map.is_empty() {
            warn!(map = map.name(), "walk built with no walkers");
        }

        let rngs = map
            .store()
            .ids()
            .map(|id| AgentRng::new(self.config.seed, id))
            .collect();

        info!(
            map = map.name(),
            walkers = map.len(),
            steps = self.config.steps,
            seed = self.config.seed,
            "walk ready"
        );

        Ok(Walk::new(self.config, map, rngs))
    }
}

impl WalkBuilder<Domain> {
    /// Builder over a runtime-selected map.
    pub fn from_spec(config: WalkConfig, spec: DomainSpec) -> SimResult<Self> {
        Ok(Self::new(config, Domain::from_spec(spec)?))
    }
}
