//! The unbounded plane.

use dw_core::Vec2;

use crate::{Boundary, Landing};

/// Infinite plane starting at the origin.  Steps are applied as-is.
#[derive(Clone, Debug)]
pub struct Plane {
    name: String,
}

impl Plane {
    pub fn new() -> Self {
        Self { name: "Plane".to_owned() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new()
    }
}

impl Boundary for Plane {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_point(&self) -> Vec2 {
        Vec2::ZERO
    }

    #[inline]
    fn resolve(&self, previous: Vec2, step: Vec2) -> Landing {
        Landing::straight(previous + step)
    }
}
