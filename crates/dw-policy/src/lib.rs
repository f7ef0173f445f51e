//! `dw-policy` — how a walker picks its next displacement.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`model`]    | `StepPolicy` trait                                            |
//! | [`builtin`]  | `FourDirections`, `FourDirectionsBiased`, `AnyDirection`,     |
//! |              | `AnyDirectionAndLength`                                       |
//! | [`kind`]     | `PolicyKind` — runtime selector for the built-ins             |
//! | [`scripted`] | `ScriptedPolicy` — replays a fixed list of displacements      |
//! | [`error`]    | `PolicyError`, `PolicyResult<T>`                              |
//!
//! # Design notes
//!
//! Policies are stateless with respect to the walk: all randomness comes from
//! the `AgentRng` handed to [`StepPolicy::sample`], so a policy instance can
//! be shared by any number of walkers and a fixed seed reproduces every
//! displacement.

pub mod builtin;
pub mod error;
pub mod kind;
pub mod model;
pub mod scripted;


pub use builtin::{AnyDirection, AnyDirectionAndLength, FourDirections, FourDirectionsBiased};
pub use error::{PolicyError, PolicyResult};
pub use kind::PolicyKind;
pub use model::StepPolicy;
pub use scripted::ScriptedPolicy;
