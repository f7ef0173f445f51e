//! `dw-map` — map domains, walker state, and trajectory recording.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`boundary`] | `Boundary` trait, `Landing`, `Crossing`                          |
//! | [`plane`]    | `Plane` — unbounded, never wraps                                 |
//! | [`torus`]    | `Torus` — periodic wrap on both axes                             |
//! | [`portals`]  | `Portals` — entrance points that teleport to paired exits        |
//! | [`domain`]   | `Domain` runtime enum, `DomainSpec` construction parameters      |
//! | [`point`]    | `TrajectoryPoint` — recorded position + discontinuity flag       |
//! | [`state`]    | `AgentState`, `AgentInfo`                                        |
//! | [`store`]    | `TrajectoryStore` — `Vec<AgentState>` indexed by `AgentId`       |
//! | [`engine`]   | `MapEngine<B>` — registration, stepping, read access             |
//! | [`error`]    | `ConstructionError`, `MovementError`, `MapError`, `MapResult<T>` |
//!
//! # Movement model
//!
//! 1. [`MapEngine::register`] places a walker at the boundary's start point
//!    and records that point as `trajectory[0]`.
//! 2. [`MapEngine::advance`] asks the walker's policy for a displacement,
//!    passes `(previous, step)` to [`Boundary::resolve`], and appends the
//!    resulting [`Landing`] as a [`TrajectoryPoint`].
//! 3. A point whose `jump` flag is set was reached by a wrap or teleport;
//!    renderers must not draw a segment into it.
//!
//! The boundary type is a generic parameter so callers that know their map
//! at compile time pay no dispatch cost; [`MapDomain`] (`MapEngine<Domain>`)
//! covers the choose-at-runtime case.

pub mod boundary;
pub mod domain;
pub mod engine;
pub mod error;
pub mod plane;
pub mod point;
pub mod portals;
pub mod state;
pub mod store;
pub mod torus;


pub use boundary::{Boundary, Crossing, Landing};
pub use domain::{Domain, DomainSpec};
pub use engine::MapEngine;
pub use error::{ConstructionError, MapError, MapResult, MovementError};
pub use plane::Plane;
pub use point::TrajectoryPoint;
pub use portals::{CrossingTest, Portals};
pub use state::{AgentInfo, AgentState};
pub use store::TrajectoryStore;
pub use torus::Torus;

/// A map whose domain is chosen at runtime.
pub type MapDomain = MapEngine<Domain>;
