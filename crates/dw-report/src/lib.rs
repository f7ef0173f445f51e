//! `dw-report` — read-only views over recorded trajectories.
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`row`]       | `GroupSummaryRow`, `AgentRow` — plain data rows                 |
//! | [`summary`]   | `DisplacementSummary` — mean distance from start, per group     |
//! | [`segments`]  | `path_segments` — which consecutive points a renderer connects  |
//! | [`observer`]  | `LogObserver` — `WalkObserver` that reports progress via tracing|
//!
//! Nothing here mutates a map; every function takes `&MapEngine` or
//! `&TrajectoryStore`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dw_report::{DisplacementSummary, LogObserver};
//!
//! let mut obs = LogObserver::new(100);
//! walk.run(&mut obs)?;
//! println!("{}", DisplacementSummary::from_map(walk.map()));
//! ```

pub mod observer;
pub mod row;
pub mod segments;
pub mod summary;

#[cfg(test)]
mod tests;

pub use observer::LogObserver;
pub use row::{AgentRow, GroupSummaryRow};
pub use segments::{Segment, path_segments};
pub use summary::{DisplacementSummary, agent_rows};
