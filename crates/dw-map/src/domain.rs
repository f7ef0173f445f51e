//! Runtime choice of map domain.

use dw_core::Vec2;

use crate::{Boundary, ConstructionError, Landing, Plane, Portals, Torus};

/// Constructor parameters for each domain kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainSpec {
    Plane,
    Torus {
        size: Vec2,
    },
    Portals {
        entrances: Vec<Vec2>,
        exits:     Vec<Vec2>,
    },
}

impl DomainSpec {
    /// Square torus shorthand: a scalar size is broadcast to both axes.
    pub fn square_torus(side: f64) -> Self {
        DomainSpec::Torus { size: Vec2::new(side, side) }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DomainSpec::Plane          => "plane",
            DomainSpec::Torus { .. }   => "torus",
            DomainSpec::Portals { .. } => "portals",
        }
    }
}

/// One of the built-in boundaries, selected at runtime.
#[derive(Clone, Debug)]
pub enum Domain {
    Plane(Plane),
    Torus(Torus),
    Portals(Portals),
}

impl Domain {
    /// Validate `spec` and build the matching boundary.
    pub fn from_spec(spec: DomainSpec) -> Result<Self, ConstructionError> {
        Ok(match spec {
            DomainSpec::Plane                       => Domain::Plane(Plane::new()),
            DomainSpec::Torus { size }              => Domain::Torus(Torus::new(size)?),
            DomainSpec::Portals { entrances, exits } => Domain::Portals(Portals::new(entrances, exits)?),
        })
    }
}

impl From<Plane> for Domain {
    fn from(p: Plane) -> Self {
        Domain::Plane(p)
    }
}

impl From<Torus> for Domain {
    fn from(t: Torus) -> Self {
        Domain::Torus(t)
    }
}

impl From<Portals> for Domain {
    fn from(p: Portals) -> Self {
        Domain::Portals(p)
    }
}

impl Boundary for Domain {
    fn name(&self) -> &str {
        match self {
            Domain::Plane(b)   => b.name(),
            Domain::Torus(b)   => b.name(),
            Domain::Portals(b) => b.name(),
        }
    }

    fn start_point(&self) -> Vec2 {
        match self {
            Domain::Plane(b)   => b.start_point(),
            Domain::Torus(b)   => b.start_point(),
            Domain::Portals(b) => b.start_point(),
        }
    }

    fn extent(&self) -> Option<Vec2> {
        match self {
            Domain::Plane(b)   => b.extent(),
            Domain::Torus(b)   => b.extent(),
            Domain::Portals(b) => b.extent(),
        }
    }

    #[inline]
    fn resolve(&self, previous: Vec2, step: Vec2) -> Landing {
        match self {
            Domain::Plane(b)   => b.resolve(previous, step),
            Domain::Torus(b)   => b.resolve(previous, step),
            Domain::Portals(b) => b.resolve(previous, step),
        }
    }
}
