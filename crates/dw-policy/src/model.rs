//! The `StepPolicy` trait — the extension point for new kinds of walker.

use dw_core::{AgentRng, Vec2};

use crate::PolicyResult;

/// Produces one displacement per call.
///
/// Successive calls must be independent and identically distributed: a
/// policy keeps no memory of earlier steps and draws all randomness from
/// `rng`.  The map engine applies its boundary rules to the returned vector;
/// a policy never sees positions.
///
/// # Errors
///
/// A policy that cannot produce a displacement returns `Err`.  The engine
/// reports this as a fatal movement error for the walker; it never retries.
///
/// # Example
///
/// ```rust
/// use dw_core::{AgentRng, Vec2};
/// use dw_policy::{PolicyResult, StepPolicy};
///
/// struct EastOnly;
///
/// impl StepPolicy for EastOnly {
///     fn name(&self) -> &str { "East Only" }
///     fn sample(&self, _rng: &mut AgentRng) -> PolicyResult<Vec2> {
///         Ok(Vec2::new(0.0, 1.0))
///     }
/// }
///
/// let mut rng = AgentRng::from_seed(1);
/// assert_eq!(EastOnly.sample(&mut rng).unwrap(), Vec2::new(0.0, 1.0));
/// ```
pub trait StepPolicy: Send + Sync + 'static {
    /// Label used to group walkers in reports.
    fn name(&self) -> &str;

    /// Draw the next displacement.
    fn sample(&self, rng: &mut AgentRng) -> PolicyResult<Vec2>;
}
