//! Periodic (toroidal) map.

use dw_core::Vec2;

use crate::{Boundary, ConstructionError, Crossing, Landing};

/// A `size[0] × size[1]` map whose opposite edges are glued together.
///
/// Every position reached by a step lies in `[0, size[0]) × [0, size[1])`.
/// A step whose unwrapped proposal falls outside that rectangle is wrapped
/// with floor modulo and flagged as a jump; the walker's motion on the torus
/// is still continuous, only its embedding in the plane is not.
///
/// The start point is the exception: its axes are swapped (see
/// [`Boundary::start_point`]), so on a non-square torus with
/// `size[1] / 2 >= size[0]` it lies outside the rectangle.  The first step
/// from there always wraps.
#[derive(Clone, Debug)]
pub struct Torus {
    name: String,
    size: Vec2,
}

impl Torus {
    /// Build a torus of the given size.  Both components must be finite
    /// and strictly positive.
    pub fn new(size: Vec2) -> Result<Self, ConstructionError> {
        for axis in 0..2 {
            let value = size[axis];
            if !value.is_finite() || value <= 0.0 {
                return Err(ConstructionError::InvalidMapSize { axis, value });
            }
        }
        Ok(Self { name: "Torus".to_owned(), size })
    }

    /// Square torus with side `side`.
    pub fn square(side: f64) -> Result<Self, ConstructionError> {
        Self::new(Vec2::new(side, side))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

impl Boundary for Torus {
    fn name(&self) -> &str {
        &self.name
    }

    /// `(floor(size[1] / 2), floor(size[0] / 2))`; the axes are swapped.
    /// Not wrapped, so it can sit outside a non-square map.
    fn start_point(&self) -> Vec2 {
        Vec2::new((self.size[1] / 2.0).floor(), (self.size[0] / 2.0).floor())
    }

    fn extent(&self) -> Option<Vec2> {
        Some(self.size)
    }

    fn resolve(&self, previous: Vec2, step: Vec2) -> Landing {
        let proposed = previous + step;
        // Checked on the unwrapped proposal.
        let crossing = if proposed.within(self.size) { Crossing::None } else { Crossing::Wrap };
        Landing {
            proposed,
            position: proposed.wrap(self.size),
            crossing,
        }
    }
}
