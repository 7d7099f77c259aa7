use gf_core::Coordinate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    #[error("at least 2 waypoints are required, got {0}")]
    InsufficientWaypoints(usize),

    #[error("steps per leg must be at least 2, got {0}")]
    InvalidStepCount(usize),

    #[error("waypoint {index} {point} is outside the boundary")]
    OutOfBounds { index: usize, point: Coordinate },

    #[error("no boundary is set")]
    BoundaryNotSet,

    #[error("route has no start point")]
    MissingStart,

    #[error("destination order is not a permutation of 0..{len}")]
    InvalidOrder { len: usize },
}

pub type PathResult<T> = Result<T, PathError>;
