//! Recorded trajectory points.

use dw_core::Vec2;

use crate::Landing;

/// One entry of a walker's trajectory.
///
/// `jump` is `true` when this point was reached by a wrap or teleport, i.e.
/// the segment from the previous point to this one is not part of the path.
/// On the plane it is always `false`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectoryPoint {
    pub pos:  Vec2,
    pub jump: bool,
}

impl TrajectoryPoint {
    /// Unflagged point; used for `trajectory[0]`.
    #[inline]
    pub fn start(pos: Vec2) -> Self {
        Self { pos, jump: false }
    }
}

impl From<Landing> for TrajectoryPoint {
    #[inline]
    fn from(l: Landing) -> Self {
        Self { pos: l.position, jump: l.is_jump() }
    }
}
