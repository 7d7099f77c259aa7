//! Linear waypoint interpolation.

use gf_core::Coordinate;
use gf_geometry::Boundary;

use crate::{PathError, PathResult};

/// Interpolate `steps_per_leg` evenly spaced points along every leg between
/// consecutive `waypoints`.
///
/// Interpolation is linear in latitude/longitude, not geodesic.  The first
/// and last point of every leg are the waypoints themselves, bit for bit.
/// Shared waypoints are repeated at leg boundaries (see the crate docs).
///
/// # Errors
///
/// - `InsufficientWaypoints` if fewer than 2 waypoints are given.
/// - `InvalidStepCount` if `steps_per_leg < 2`.
pub fn interpolate(waypoints: &[Coordinate], steps_per_leg: usize) -> PathResult<Vec<Coordinate>> {
    if waypoints.len() < 2 {
        return Err(PathError::InsufficientWaypoints(waypoints.len()));
    }
    if steps_per_leg < 2 {
        return Err(PathError::InvalidStepCount(steps_per_leg));
    }

    let last = (steps_per_leg - 1) as f64;
    let mut path = Vec::with_capacity((waypoints.len() - 1) * steps_per_leg);

    for leg in waypoints.windows(2) {
        let (from, to) = (leg[0], leg[1]);
        path.push(from);
        for i in 1..steps_per_leg - 1 {
            path.push(from.lerp(to, i as f64 / last));
        }
        path.push(to);
    }

    Ok(path)
}

/// Check that every waypoint lies inside `boundary`.
///
/// # Errors
///
/// `BoundaryNotSet` when `boundary` is `None`, otherwise `OutOfBounds` for
/// the first waypoint outside it.
pub fn validate_waypoints(boundary: Option<&Boundary>, waypoints: &[Coordinate]) -> PathResult<()> {
    let boundary = boundary.ok_or(PathError::BoundaryNotSet)?;
    match waypoints.iter().position(|&p| !boundary.contains(p)) {
        Some(index) => Err(PathError::OutOfBounds { index, point: waypoints[index] }),
        None => Ok(()),
    }
}
