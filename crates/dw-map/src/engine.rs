//! High-level map engine: registers walkers and advances them one step at a
//! time under the boundary's rules.

use std::sync::Arc;

use dw_core::{AgentId, AgentRng, Vec2};
use dw_policy::{PolicyKind, StepPolicy};
use tracing::{debug, trace};

use crate::{
    AgentInfo, AgentState, Boundary, ConstructionError, Crossing, Domain, DomainSpec, Landing,
    MapError, MapResult, MovementError, TrajectoryPoint, TrajectoryStore,
};

/// Wraps a [`Boundary`] and a [`TrajectoryStore`].
///
/// # Type parameter
///
/// `B` is the spatial rule-set ([`Plane`][crate::Plane],
/// [`Torus`][crate::Torus], [`Portals`][crate::Portals], or the runtime
/// [`Domain`] enum).
pub struct MapEngine<B: Boundary> {
    /// The spatial rule-set.  Immutable once the engine exists.
    boundary: B,

    /// Every registered walker.
    store: TrajectoryStore,
}

impl<B: Boundary> MapEngine<B> {
    /// Create an engine with no walkers.
    pub fn new(boundary: B) -> Self {
        Self {
            boundary,
            store: TrajectoryStore::new(),
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a walker using one of the built-in policies.
    ///
    /// `display_name` defaults to [`PolicyKind::default_name`].
    pub fn register(&mut self, kind: PolicyKind, display_name: Option<String>) -> AgentId {
        self.register_policy(kind.build(), display_name)
    }

    /// Register a walker bound to `policy`.  The same policy instance may be
    /// shared by several walkers.
    pub fn register_policy(
        &mut self,
        policy:       Arc<dyn StepPolicy>,
        display_name: Option<String>,
    ) -> AgentId {
        let name = display_name.unwrap_or_else(|| policy.name().to_owned());
        let start = self.boundary.start_point();
        let id = self.store.insert(AgentState::new(policy, name, start));
        debug!(agent = %id, map = self.boundary.name(), %start, "registered walker");
        id
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Advance `agent` by one step drawn from its policy.
    ///
    /// # Errors
    ///
    /// - `AgentNotFound` for an unknown handle.
    /// - [`MovementError::NonMovable`] if the policy fails.
    /// - [`MovementError::NonFiniteStep`] if it returns NaN or ±∞.
    ///
    /// On error nothing is recorded.
    pub fn advance(&mut self, agent: AgentId, rng: &mut AgentRng) -> MapResult<Landing> {
        let state = self.store.get(agent).ok_or_else(|| MapError::not_found(agent))?;
        let step = state
            .policy()
            .sample(rng)
            .map_err(|source| MovementError::NonMovable { agent, source })?;
        self.apply_step(agent, step)
    }

    /// Move `agent` by an explicit displacement, applying the same boundary
    /// rules as [`advance`][Self::advance].
    pub fn apply_step(&mut self, agent: AgentId, step: Vec2) -> MapResult<Landing> {
        if !step.is_finite() {
            return Err(MovementError::NonFiniteStep { agent, step }.into());
        }
        let state = self.store.get_mut(agent).ok_or_else(|| MapError::not_found(agent))?;
        let landing = self.boundary.resolve(state.position(), step);

        match landing.crossing {
            Crossing::None => trace!(agent = %agent, to = %landing.position, "step"),
            Crossing::Wrap => debug!(
                agent = %agent,
                proposed = %landing.proposed,
                to = %landing.position,
                "wrapped around map edge"
            ),
            Crossing::Portal(portal) => debug!(
                agent = %agent,
                %portal,
                proposed = %landing.proposed,
                to = %landing.position,
                "teleported through portal"
            ),
        }

        state.record(landing);
        Ok(landing)
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Recorded trajectory of `agent`, start point first.
    pub fn trajectory(&self, agent: AgentId) -> MapResult<&[TrajectoryPoint]> {
        self.store.trajectory(agent).ok_or_else(|| MapError::not_found(agent))
    }

    /// Current position of `agent`.
    pub fn position(&self, agent: AgentId) -> MapResult<Vec2> {
        self.state(agent).map(AgentState::position)
    }

    pub fn state(&self, agent: AgentId) -> MapResult<&AgentState> {
        self.store.get(agent).ok_or_else(|| MapError::not_found(agent))
    }

    /// `(id, policy name, display name)` for every walker, in registration
    /// order.
    pub fn agents(&self) -> impl Iterator<Item = AgentInfo<'_>> {
        self.store.iter().map(|(id, s)| AgentInfo {
            id,
            policy_name:  s.policy_name(),
            display_name: s.display_name(),
        })
    }

    #[inline]
    pub fn store(&self) -> &TrajectoryStore {
        &self.store
    }

    #[inline]
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.boundary.name()
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.boundary.start_point()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl MapEngine<Domain> {
    /// Build a runtime-selected map from its parameters.
    pub fn from_spec(spec: DomainSpec) -> Result<Self, ConstructionError> {
        Domain::from_spec(spec).map(Self::new)
    }
}
