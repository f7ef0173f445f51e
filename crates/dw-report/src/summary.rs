//! Displacement statistics.

use std::fmt;

use dw_core::Vec2;
use dw_map::{Boundary, MapEngine, TrajectoryStore};

use crate::{AgentRow, GroupSummaryRow};

/// Distance from the start point, grouped by display name.
///
/// Distances use the recorded position as-is: on a torus that is the wrapped
/// position, so a walker that circled the map counts as close to home.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplacementSummary {
    pub map_name:    String,
    pub start_point: Vec2,
    /// One row per display name, in order of first registration.
    pub groups:      Vec<GroupSummaryRow>,
    /// Mean over every walker; `None` for an empty map.
    pub overall:     Option<f64>,
}

impl DisplacementSummary {
    pub fn from_map<B: Boundary>(map: &MapEngine<B>) -> Self {
        Self::from_store(map.name(), map.start_point(), map.store())
    }

    pub fn from_store(map_name: &str, start_point: Vec2, store: &TrajectoryStore) -> Self {
        // (name, count, distance sum)
        let mut groups: Vec<(String, usize, f64)> = Vec::new();
        let mut total = 0.0;

        for (_, state) in store.iter() {
            let d = state.position().distance(start_point);
            total += d;
            match groups.iter_mut().find(|g| g.0 == state.display_name()) {
                Some(g) => {
                    g.1 += 1;
                    g.2 += d;
                }
                None => groups.push((state.display_name().to_owned(), 1, d)),
            }
        }

        let overall = (!store.is_empty()).then(|| total / store.len() as f64);
        let groups = groups
            .into_iter()
            .map(|(name, agents, sum)| GroupSummaryRow {
                name,
                agents,
                mean_distance: sum / agents as f64,
            })
            .collect();

        Self {
            map_name: map_name.to_owned(),
            start_point,
            groups,
            overall,
        }
    }

    /// Row for `name`, if any walker carries it.
    pub fn group(&self, name: &str) -> Option<&GroupSummaryRow> {
        self.groups.iter().find(|g| g.name == name)
    }
}

impl fmt::Display for DisplacementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name of the map: {}.", self.map_name)?;
        let names: Vec<&str> = self.groups.iter().map(|g| g.name.as_str()).collect();
        writeln!(f, "Names of the drunks in the map: {}.", names.join(", "))?;
        for g in &self.groups {
            writeln!(f, "Average distance of {}: {}.", g.name, g.mean_distance)?;
        }
        match self.overall {
            Some(avg) => write!(f, "Average distance from starting point: {avg}."),
            None => write!(f, "Average distance from starting point: n/a."),
        }
    }
}

/// One [`AgentRow`] per walker, in registration order.
pub fn agent_rows<B: Boundary>(map: &MapEngine<B>) -> Vec<AgentRow> {
    let start = map.start_point();
    map.store()
        .iter()
        .map(|(id, s)| AgentRow {
            agent_id: id,
            name:     s.display_name().to_owned(),
            position: s.position(),
            distance: s.position().distance(start),
            steps:    s.steps(),
            jumps:    s.jumps(),
        })
        .collect()
}
