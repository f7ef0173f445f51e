use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy `{policy}` ran out of scripted steps after {steps}")]
    Exhausted {
        policy: String,
        steps:  usize,
    },

    #[error("policy failed: {0}")]
    Failed(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
