//! `dw-sim` — step loop orchestrator for the drunkwalk simulator.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.steps:
//!   ① on_step_start
//!   ② Advance  — every walker, in ascending AgentId order, takes one step
//!                with its own seeded AgentRng.
//!   ③ on_step_end(step, jumps)
//!   ④ on_snapshot every `config.snapshot_interval_steps` steps
//! on_walk_end
//! ```
//!
//! The first movement error stops the loop and is returned; the walker that
//! failed is named in the error.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dw_map::DomainSpec;
//! use dw_policy::PolicyKind;
//! use dw_sim::{NoopObserver, WalkBuilder, WalkConfig};
//!
//! let config = WalkConfig { seed: 42, steps: 1_000, snapshot_interval_steps: 100 };
//! let mut walk = WalkBuilder::from_spec(config, DomainSpec::square_torus(50.0))?
//!     .agents(PolicyKind::FourDirections, 10)
//!     .agents(PolicyKind::AnyDirection, 10)
//!     .build()?;
//! walk.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod walk;

#[cfg(test)]
mod tests;

pub use builder::WalkBuilder;
pub use config::WalkConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WalkObserver};
pub use walk::Walk;
