//! The outer boundary ring.

use gf_core::Coordinate;

use crate::ring::{self, Bounds};
use crate::{GeometryError, GeometryResult, Region};

/// A closed ring of at least three distinct coordinates.
///
/// Everything authored in a session (zone centers, waypoints) must lie inside
/// the active boundary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    /// Closed ring: `ring.first() == ring.last()`.
    ring:   Vec<Coordinate>,
    bounds: Bounds,
}

impl Boundary {
    /// Validate `points` and close the ring if needed.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if any coordinate is non-finite or fewer than three
    /// distinct points are given.
    pub fn new(points: Vec<Coordinate>) -> GeometryResult<Self> {
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(GeometryError::InvalidGeometry(format!(
                "non-finite coordinate {bad:?}"
            )));
        }

        let mut distinct: Vec<Coordinate> = Vec::with_capacity(points.len());
        for &p in &points {
            if !distinct.contains(&p) {
                distinct.push(p);
            }
        }
        if distinct.len() < 3 {
            return Err(GeometryError::InvalidGeometry(format!(
                "boundary needs at least 3 distinct points, got {}",
                distinct.len()
            )));
        }

        let ring = ring::close(points);
        let bounds = Bounds::of(&ring);
        Ok(Self { ring, bounds })
    }

    /// The closed ring, first point repeated at the end.
    #[inline]
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    /// The ring without its closing point.
    #[inline]
    pub fn vertices(&self) -> &[Coordinate] {
        &self.ring[..self.ring.len() - 1]
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        self.bounds.contains(point) && ring::ring_contains(&self.ring, point)
    }
}

impl Region for Boundary {
    #[inline]
    fn contains_point(&self, point: Coordinate) -> bool {
        self.contains(point)
    }
}
