//! The `Boundary` trait — how a proposed move becomes an accepted position.

use dw_core::{PortalId, Vec2};

/// Why a landing is not a straight continuation of the previous position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Ordinary step.
    None,
    /// The proposal left the torus and was wrapped back in.
    Wrap,
    /// The step passed through this portal's entrance.
    Portal(PortalId),
}

/// Result of resolving one step against a boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Landing {
    /// Position before boundary rules were applied (`previous + step`).
    pub proposed: Vec2,
    /// Accepted position.
    pub position: Vec2,
    pub crossing: Crossing,
}

impl Landing {
    /// A landing with no boundary interaction.
    #[inline]
    pub fn straight(position: Vec2) -> Self {
        Self { proposed: position, position, crossing: Crossing::None }
    }

    /// `true` for wraps and teleports.
    #[inline]
    pub fn is_jump(&self) -> bool {
        !matches!(self.crossing, Crossing::None)
    }
}

/// Spatial rule-set for a map.
///
/// Implementations are immutable after construction: `resolve` is a pure
/// function of its arguments and the boundary's parameters.
pub trait Boundary {
    /// Human-readable map name used in reports.
    fn name(&self) -> &str;

    /// Where every walker starts.
    fn start_point(&self) -> Vec2;

    /// Finite map size, for maps that have one.
    fn extent(&self) -> Option<Vec2> {
        None
    }

    /// Apply the boundary rules to a step of `step` from `previous`.
    fn resolve(&self, previous: Vec2, step: Vec2) -> Landing;
}
