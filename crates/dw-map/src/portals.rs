//! Plane with point-to-point portals.

use dw_core::{PortalId, Vec2};

use crate::{Boundary, ConstructionError, Crossing, Landing};

/// How a portal entrance is judged to lie on a step's segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CrossingTest {
    /// `|raw - prev| == |e - prev| + |e - raw|` with exact float equality.
    ///
    /// Rounding makes this miss most diagonal crossings; axis-aligned steps
    /// through lattice points are detected reliably.
    Exact,
    /// Entrance within `eps` of the closed segment.  Detects crossings the
    /// exact test misses, so trajectories differ from `Exact` runs.
    Tolerance(f64),
}

/// Unbounded plane starting at the origin, with `entrances[i]` teleporting to
/// `exits[i]`.
///
/// When a step's segment passes through an entrance, the overshoot past the
/// entrance is replayed from the paired exit:
/// `final = exits[i] + (raw - entrances[i])`.  Portals are tested in list
/// order and the first match wins.
#[derive(Clone, Debug)]
pub struct Portals {
    name:      String,
    entrances: Vec<Vec2>,
    exits:     Vec<Vec2>,
    test:      CrossingTest,
}

impl Portals {
    /// Pair `entrances[i]` with `exits[i]`.  Fails if the lists differ in
    /// length or hold more portals than a [`PortalId`] can number.
    pub fn new(entrances: Vec<Vec2>, exits: Vec<Vec2>) -> Result<Self, ConstructionError> {
        if entrances.len() != exits.len() {
            return Err(ConstructionError::MismatchedPortals {
                entrances: entrances.len(),
                exits:     exits.len(),
            });
        }
        check_portal_count(entrances.len())?;
        Ok(Self {
            name: "Portals".to_owned(),
            entrances,
            exits,
            test: CrossingTest::Exact,
        })
    }

    /// Switch to [`CrossingTest::Tolerance`].
    pub fn with_tolerance(mut self, eps: f64) -> Result<Self, ConstructionError> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(ConstructionError::InvalidTolerance(eps));
        }
        self.test = CrossingTest::Tolerance(eps);
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn entrances(&self) -> &[Vec2] {
        &self.entrances
    }

    pub fn exits(&self) -> &[Vec2] {
        &self.exits
    }

    pub fn crossing_test(&self) -> CrossingTest {
        self.test
    }

    /// `true` if `entrance` lies on the segment `previous`–`raw`.
    fn passes_through(&self, entrance: Vec2, previous: Vec2, raw: Vec2) -> bool {
        match self.test {
            CrossingTest::Exact => {
                raw.distance(previous) == entrance.distance(previous) + entrance.distance(raw)
            }
            CrossingTest::Tolerance(eps) => entrance.distance_to_segment(previous, raw) <= eps,
        }
    }
}

impl Boundary for Portals {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_point(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn resolve(&self, previous: Vec2, step: Vec2) -> Landing {
        let raw = previous + step;
        let hit = self
            .entrances
            .iter()
            .position(|&e| self.passes_through(e, previous, raw));

        match hit {
            Some(i) => Landing {
                proposed: raw,
                position: self.exits[i] + (raw - self.entrances[i]),
                // fits: the count was checked in `new`
                crossing: Crossing::Portal(PortalId(i as u32)),
            },
            None => Landing::straight(raw),
        }
    }
}

pub(crate) fn check_portal_count(count: usize) -> Result<(), ConstructionError> {
    u32::try_from(count)
        .map(|_| ())
        .map_err(|_| ConstructionError::TooManyPortals(count))
}
