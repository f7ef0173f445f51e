use dw_map::{ConstructionError, MapError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("walk configuration error: {0}")]
    Config(String),

    #[error("invalid map: {0}")]
    Construction(#[from] ConstructionError),

    #[error("step {step}: {source}")]
    Step {
        step:   u64,
        source: MapError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
