//! The `TrajectoryStore` — walker state indexed by `AgentId`.

use dw_core::AgentId;

use crate::{AgentState, TrajectoryPoint};

/// Append-only storage for every walker on one map.
///
/// `AgentId(i)` is the index of the `i`-th registered walker.  Walkers are
/// never removed, so a handle stays valid for the lifetime of the store.
#[derive(Debug, Default)]
pub struct TrajectoryStore {
    states: Vec<AgentState>,
}

impl TrajectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a walker and return its handle.
    pub fn insert(&mut self, state: AgentState) -> AgentId {
        let id = AgentId(self.states.len() as u32);
        self.states.push(state);
        id
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&AgentState> {
        self.states.get(agent.index())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, agent: AgentId) -> Option<&mut AgentState> {
        self.states.get_mut(agent.index())
    }

    /// Trajectory of `agent`, or `None` for an unknown handle.
    #[inline]
    pub fn trajectory(&self, agent: AgentId) -> Option<&[TrajectoryPoint]> {
        self.get(agent).map(AgentState::trajectory)
    }

    /// All walkers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &AgentState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (AgentId(i as u32), s))
    }

    /// All handles in registration order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.states.len()).map(|i| AgentId(i as u32))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
