//! Jump-aware path segmentation.
//!
//! Renderers draw a trajectory as line segments between consecutive points.
//! A segment ending in a point flagged `jump` would cut straight across the
//! map (wrap) or to a distant exit (teleport), so by default it is dropped.

use dw_core::Vec2;
use dw_map::TrajectoryPoint;

/// A straight piece of path, in trajectory coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to:   Vec2,
}

/// Consecutive point pairs of `trajectory`.
///
/// With `include_jumps == false`, pairs whose second point is flagged are
/// skipped.  A one-point trajectory has no segments.
pub fn path_segments(trajectory: &[TrajectoryPoint], include_jumps: bool) -> Vec<Segment> {
    trajectory
        .windows(2)
        .filter(|w| include_jumps || !w[1].jump)
        .map(|w| Segment { from: w[0].pos, to: w[1].pos })
        .collect()
}
