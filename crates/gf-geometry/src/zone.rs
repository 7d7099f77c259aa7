//! Circular zones.

use gf_core::{Coordinate, ZoneId};

use crate::ring::{self, Bounds};
use crate::{GeometryError, GeometryResult, Region};

/// A circular geofence, stored as a `segments`-gon whose vertices lie on the
/// circle.
///
/// The polygon is inscribed, so points near the rim but between two vertices
/// fall outside.  The worst-case inward error is
/// `radius * (1 - cos(π / segments))`, about 0.12 % of the radius at the
/// default 64 segments.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub id:       ZoneId,
    pub center:   Coordinate,
    pub radius_m: f64,
    ring:         Vec<Coordinate>,
    bounds:       Bounds,
}

impl Zone {
    /// Build the polygon approximation of a circle.
    ///
    /// Vertices are laid out counter-clockwise starting due north, one every
    /// `360 / segments` degrees of bearing.
    pub fn new(id: ZoneId, center: Coordinate, radius_m: f64, segments: usize) -> GeometryResult<Self> {
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius_m));
        }
        if !center.is_finite() {
            return Err(GeometryError::InvalidGeometry(format!(
                "non-finite zone center {center:?}"
            )));
        }
        if segments < 3 {
            return Err(GeometryError::InvalidGeometry(format!(
                "a circle needs at least 3 segments, got {segments}"
            )));
        }

        let step = -360.0 / segments as f64;
        let points: Vec<Coordinate> = (0..segments)
            .map(|i| center.destination(i as f64 * step, radius_m))
            .collect();
        let ring = ring::close(points);
        let bounds = Bounds::of(&ring);

        Ok(Self { id, center, radius_m, ring, bounds })
    }

    /// The closed polygon ring.
    #[inline]
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    /// Number of polygon vertices (the configured angular resolution).
    #[inline]
    pub fn segments(&self) -> usize {
        self.ring.len() - 1
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        self.bounds.contains(point) && ring::ring_contains(&self.ring, point)
    }
}

impl Region for Zone {
    #[inline]
    fn contains_point(&self, point: Coordinate) -> bool {
        self.contains(point)
    }
}
