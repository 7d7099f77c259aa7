use gf_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthoringError {
    #[error("{0}")]
    Sim(#[from] SimError),

    #[error("no agent selected")]
    NoAgentSelected,

    #[error("points A and B are not set")]
    EndpointsNotSet,
}

pub type AuthoringResult<T> = Result<T, AuthoringError>;
