use dw_core::{AgentId, DwError, Vec2};
use dw_policy::PolicyError;
use thiserror::Error;

/// Invalid map parameters.  Raised at construction, never retried.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("portal count mismatch: {entrances} entrances but {exits} exits")]
    MismatchedPortals {
        entrances: usize,
        exits:     usize,
    },

    #[error("{0} portals exceeds the PortalId range")]
    TooManyPortals(usize),

    #[error("map size along axis {axis} must be finite and positive, got {value}")]
    InvalidMapSize {
        axis:  usize,
        value: f64,
    },

    #[error("portal tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// A walker could not take its step.  Fatal for that walker.
#[derive(Debug, Error)]
pub enum MovementError {
    #[error("{agent} cannot move: {source}")]
    NonMovable {
        agent:  AgentId,
        source: PolicyError,
    },

    #[error("{agent} produced a non-finite step {step}")]
    NonFiniteStep {
        agent: AgentId,
        step:  Vec2,
    },
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Movement(#[from] MovementError),

    #[error(transparent)]
    Core(#[from] DwError),
}

impl MapError {
    pub(crate) fn not_found(agent: AgentId) -> Self {
        MapError::Core(DwError::AgentNotFound(agent))
    }

    /// The walker this error is about, if any.
    pub fn agent(&self) -> Option<AgentId> {
        match self {
            MapError::Movement(MovementError::NonMovable { agent, .. })
            | MapError::Movement(MovementError::NonFiniteStep { agent, .. })
            | MapError::Core(DwError::AgentNotFound(agent)) => Some(*agent),
            _ => None,
        }
    }
}

pub type MapResult<T> = Result<T, MapError>;

