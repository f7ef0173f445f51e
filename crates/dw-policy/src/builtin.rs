//! The four built-in walkers.

use std::f64::consts::TAU;

use dw_core::{AgentRng, Vec2};

use crate::{PolicyResult, StepPolicy};

const CARDINAL: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, -1.0),
];

/// North steps are 1.1 long and south steps 0.9, so the walker drifts along
/// axis 0 by +0.05 per step on average.
const CARDINAL_NORTH_BIASED: [Vec2; 4] = [
    Vec2::new(1.1, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-0.9, 0.0),
    Vec2::new(0.0, -1.0),
];

#[inline]
fn pick(rng: &mut AgentRng, steps: &[Vec2; 4]) -> Vec2 {
    steps[rng.gen_range(0..steps.len())]
}

/// One unit step along a cardinal axis, each with probability ¼.
#[derive(Copy, Clone, Debug, Default)]
pub struct FourDirections;

impl StepPolicy for FourDirections {
    fn name(&self) -> &str {
        "4 Directions"
    }

    fn sample(&self, rng: &mut AgentRng) -> PolicyResult<Vec2> {
        Ok(pick(rng, &CARDINAL))
    }
}

/// Cardinal steps with unequal north/south lengths.
#[derive(Copy, Clone, Debug, Default)]
pub struct FourDirectionsBiased;

impl StepPolicy for FourDirectionsBiased {
    fn name(&self) -> &str {
        "4D North Biased"
    }

    fn sample(&self, rng: &mut AgentRng) -> PolicyResult<Vec2> {
        Ok(pick(rng, &CARDINAL_NORTH_BIASED))
    }
}

/// A unit step at an angle uniform in `[0, 2π)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyDirection;

impl StepPolicy for AnyDirection {
    fn name(&self) -> &str {
        "Any Direction"
    }

    fn sample(&self, rng: &mut AgentRng) -> PolicyResult<Vec2> {
        let angle: f64 = rng.random();
        Ok(Vec2::from_angle(TAU * angle))
    }
}

/// A step of length uniform in `[0, 1)` at an angle uniform in `[0, 2π)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyDirectionAndLength;

impl StepPolicy for AnyDirectionAndLength {
    fn name(&self) -> &str {
        "Any Direction and length"
    }

    fn sample(&self, rng: &mut AgentRng) -> PolicyResult<Vec2> {
        // length is drawn before the angle
        let length: f64 = rng.random();
        let angle: f64 = rng.random();
        Ok(Vec2::from_angle(TAU * angle) * length)
    }
}
