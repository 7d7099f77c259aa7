//! Geometry error type.

use thiserror::Error;

use gf_core::Coordinate;

/// Errors produced by `gf-geometry`.  All of them are input-validation
/// failures; the `ZoneSet` is left untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("no boundary is set")]
    BoundaryNotSet,

    #[error("{0} is outside the boundary")]
    OutOfBounds(Coordinate),

    #[error("invalid zone radius {0} m")]
    InvalidRadius(f64),

    #[error("zone limit of {max} reached")]
    ZoneLimitReached { max: usize },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
