//! A policy that replays a fixed list of displacements.

use std::sync::atomic::{AtomicUsize, Ordering};

use dw_core::{AgentRng, Vec2};

use crate::{PolicyError, PolicyResult, StepPolicy};

/// Returns `steps[0]`, `steps[1]`, … on successive calls and fails with
/// [`PolicyError::Exhausted`] once the list runs out.
///
/// Useful for forcing exact moves in tests and demos.  The cursor is shared,
/// so a `ScriptedPolicy` bound to two walkers hands out one list between
/// them.
#[derive(Debug)]
pub struct ScriptedPolicy {
    name:   String,
    steps:  Vec<Vec2>,
    cursor: AtomicUsize,
}

impl ScriptedPolicy {
    pub fn new(name: impl Into<String>, steps: Vec<Vec2>) -> Self {
        Self {
            name: name.into(),
            steps,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Displacements not yet handed out.
    pub fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.cursor.load(Ordering::Relaxed))
    }
}

impl StepPolicy for ScriptedPolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, _rng: &mut AgentRng) -> PolicyResult<Vec2> {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.steps.get(i).copied().ok_or_else(|| PolicyError::Exhausted {
            policy: self.name.clone(),
            steps:  self.steps.len(),
        })
    }
}
