//! Per-walker state.

use std::fmt;
use std::sync::Arc;

use dw_core::{AgentId, Vec2};
use dw_policy::StepPolicy;

use crate::{Landing, TrajectoryPoint};

/// Everything the engine knows about one walker.
///
/// Invariants, upheld by only mutating through [`AgentState::record`]:
/// - `trajectory[0]` is the map's start point;
/// - `trajectory.last().pos == position`;
/// - the trajectory only grows.
pub struct AgentState {
    policy:       Arc<dyn StepPolicy>,
    display_name: String,
    position:     Vec2,
    trajectory:   Vec<TrajectoryPoint>,
}

impl AgentState {
    /// A fresh walker standing on `start`.
    pub fn new(policy: Arc<dyn StepPolicy>, display_name: String, start: Vec2) -> Self {
        Self {
            policy,
            display_name,
            position: start,
            trajectory: vec![TrajectoryPoint::start(start)],
        }
    }

    /// Move to `landing.position` and append it to the trajectory.
    pub(crate) fn record(&mut self, landing: Landing) {
        self.position = landing.position;
        self.trajectory.push(landing.into());
    }

    #[inline]
    pub fn policy(&self) -> &Arc<dyn StepPolicy> {
        &self.policy
    }

    /// The policy's own name, e.g. `"4 Directions"`.
    #[inline]
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Label used for grouping; defaults to the policy name.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn trajectory(&self) -> &[TrajectoryPoint] {
        &self.trajectory
    }

    /// Steps taken so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.trajectory.len() - 1
    }

    /// Number of recorded wraps/teleports.
    pub fn jumps(&self) -> usize {
        self.trajectory.iter().filter(|p| p.jump).count()
    }
}

impl fmt::Debug for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentState")
            .field("policy", &self.policy.name())
            .field("display_name", &self.display_name)
            .field("position", &self.position)
            .field("steps", &self.steps())
            .finish()
    }
}

/// Read-only summary row returned by [`MapEngine::agents`][crate::MapEngine::agents].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AgentInfo<'a> {
    pub id:           AgentId,
    pub policy_name:  &'a str,
    pub display_name: &'a str,
}
