//! The active boundary together with the zones placed inside it.

use gf_core::{Coordinate, ZoneId};
use tracing::debug;

use crate::{Boundary, GeometryError, GeometryResult, Zone};

/// Owns the session's geometry: at most one boundary and an append-only list
/// of zones.
///
/// Zones only make sense relative to the boundary they were placed in, so
/// replacing or clearing the boundary drops every zone with it.
#[derive(Clone, Debug)]
pub struct ZoneSet {
    boundary:  Option<Boundary>,
    zones:     Vec<Zone>,
    max_zones: usize,
    segments:  usize,
}

impl ZoneSet {
    /// An empty set accepting up to `max_zones` zones, each approximated with
    /// `segments` vertices.
    pub fn new(max_zones: usize, segments: usize) -> Self {
        Self {
            boundary: None,
            zones: Vec::new(),
            max_zones,
            segments,
        }
    }

    /// Install a new boundary built from `points`.
    ///
    /// On success returns the number of zones dropped by the replacement.
    /// On error nothing changes.
    pub fn set_boundary(&mut self, points: Vec<Coordinate>) -> GeometryResult<usize> {
        let boundary = Boundary::new(points)?;
        let cleared = self.zones.len();
        self.zones.clear();
        self.boundary = Some(boundary);
        debug!(vertices = self.boundary().map_or(0, |b| b.vertices().len()), cleared, "boundary replaced");
        Ok(cleared)
    }

    /// Remove the boundary and every zone.
    ///
    /// Returns `None` if there was no boundary, otherwise the number of
    /// zones dropped.
    pub fn clear_boundary(&mut self) -> Option<usize> {
        self.boundary.take()?;
        let cleared = self.zones.len();
        self.zones.clear();
        Some(cleared)
    }

    /// Append a zone.
    ///
    /// Checks run in this order: boundary present, zone limit, radius,
    /// center inside the boundary.
    pub fn add_zone(&mut self, center: Coordinate, radius_m: f64) -> GeometryResult<&Zone> {
        let boundary = self.boundary.as_ref().ok_or(GeometryError::BoundaryNotSet)?;
        if self.zones.len() >= self.max_zones {
            return Err(GeometryError::ZoneLimitReached { max: self.max_zones });
        }
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius_m));
        }
        if !boundary.contains(center) {
            return Err(GeometryError::OutOfBounds(center));
        }

        let id = ZoneId(self.zones.len() as u32);
        let zone = Zone::new(id, center, radius_m, self.segments)?;
        self.zones.push(zone);
        Ok(&self.zones[id.index()])
    }

    /// `true` when a boundary is set and contains `point`.  Never an error.
    #[inline]
    pub fn boundary_contains(&self, point: Coordinate) -> bool {
        self.boundary.as_ref().is_some_and(|b| b.contains(point))
    }

    #[inline]
    pub fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    #[inline]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[inline]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    #[inline]
    pub fn max_zones(&self) -> usize {
        self.max_zones
    }
}
