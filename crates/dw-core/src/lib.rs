//! `dw-core` — foundational types for the `drunkwalk` random-walk simulator.
//!
//! This crate is a dependency of every other `dw-*` crate.  It has no `dw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `PortalId`                                 |
//! | [`geo`]     | `Vec2` — 2D position / displacement vector            |
//! | [`rng`]     | `AgentRng` — one seeded stream per walker             |
//! | [`error`]   | `DwError`, `DwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DwError, DwResult};
pub use geo::Vec2;
pub use ids::{AgentId, PortalId};
pub use rng::AgentRng;
