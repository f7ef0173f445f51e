//! Per-walker random number generation.
//!
//! Every walker owns a `SmallRng` whose seed is derived from the run seed and
//! the walker's id:
//!
//!   seed = global_seed XOR (agent_id * GOLDEN)
//!
//! `GOLDEN` is the 64-bit fractional part of the golden ratio, so adjacent ids
//! land far apart in seed space.  Two consequences the rest of the workspace
//! relies on: the order in which walkers are advanced never changes a
//! trajectory, and registering one more walker leaves the others untouched.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard};

use crate::AgentId;

const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

/// Random stream belonging to one walker.
///
/// Built once per walker by the walk builder and handed to
/// `MapEngine::advance` on every step.  Never shared, never global.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        Self::from_seed(global_seed ^ u64::from(agent.0).wrapping_mul(GOLDEN))
    }

    /// Seed without id mixing.
    pub fn from_seed(seed: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw; `f64` is uniform in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
