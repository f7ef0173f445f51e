//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `DwError` where they need
//! the shared variants.

use thiserror::Error;

use crate::AgentId;

/// Common base error for the `dw-*` crates.
#[derive(Debug, Error)]
pub enum DwError {
    #[error("{0} not found")]
    AgentNotFound(AgentId),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `dw-core`.
pub type DwResult<T> = Result<T, DwError>;
