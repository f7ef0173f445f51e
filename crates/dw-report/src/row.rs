//! Plain data row types produced by the report functions.

use dw_core::{AgentId, Vec2};

/// Mean displacement for all walkers sharing a display name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSummaryRow {
    pub name:          String,
    pub agents:        usize,
    /// Mean of `|final position - start point|` over the group.
    pub mean_distance: f64,
}

/// Final state of one walker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRow {
    pub agent_id: AgentId,
    pub name:     String,
    pub position: Vec2,
    pub distance: f64,
    pub steps:    usize,
    pub jumps:    usize,
}
