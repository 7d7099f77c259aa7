use gf_core::{AgentId, CoreError};
use gf_geometry::GeometryError;
use gf_path::PathError;
use gf_tracker::TrackerError;
use thiserror::Error;

/// Every way an engine command can be rejected.
///
/// All variants are recoverable input-validation failures: the engine state
/// is exactly what it was before the rejected call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("{0}")]
    Geometry(#[from] GeometryError),

    #[error("{0}")]
    Path(#[from] PathError),

    #[error("{0}")]
    Tracker(#[from] TrackerError),

    #[error("{0}")]
    Config(#[from] CoreError),

    #[error("agent {0} not found")]
    UnknownAgent(AgentId),

    #[error("an agent named {0:?} already exists")]
    DuplicateAgent(String),

    #[error("{agent} needs at least 2 path points to play back, has {len}")]
    InsufficientPath { agent: AgentId, len: usize },

    #[error("{0} is already running")]
    AlreadyRunning(AgentId),

    #[error("{0} is not running")]
    NotRunning(AgentId),

    #[error("the fleet is already running")]
    FleetAlreadyRunning,

    #[error("the fleet is not running")]
    FleetNotRunning,

    #[error("no agent has a path to play back")]
    FleetEmpty,
}

impl SimError {
    /// `true` for the "nothing to stop" family, which callers usually show
    /// as a notice rather than an error.
    pub fn is_informational(&self) -> bool {
        matches!(self, SimError::NotRunning(_) | SimError::FleetNotRunning)
    }
}

pub type SimResult<T> = Result<T, SimError>;
