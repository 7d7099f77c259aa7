//! Multi-leg routes built incrementally from user clicks.

use gf_core::Coordinate;

use crate::{PathError, PathResult, interpolate};

/// A start point followed by an ordered list of destinations.
///
/// Authoring tools set the start, append destinations one click at a time
/// and may reorder them (drag-and-drop in the demo) before generating the
/// path.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub start:        Option<Coordinate>,
    pub destinations: Vec<Coordinate>,
}

impl Route {
    pub fn new(start: Coordinate) -> Self {
        Self { start: Some(start), destinations: Vec::new() }
    }

    pub fn set_start(&mut self, start: Coordinate) {
        self.start = Some(start);
    }

    pub fn push_destination(&mut self, point: Coordinate) {
        self.destinations.push(point);
    }

    /// Reorder destinations so that the new `i`-th destination is the old
    /// `order[i]`-th one.
    ///
    /// # Errors
    ///
    /// `InvalidOrder` unless `order` is a permutation of
    /// `0..destinations.len()`.  The route is unchanged on error.
    pub fn reorder(&mut self, order: &[usize]) -> PathResult<()> {
        let len = self.destinations.len();
        let mut seen = vec![false; len];
        if order.len() != len {
            return Err(PathError::InvalidOrder { len });
        }
        for &i in order {
            if i >= len || std::mem::replace(&mut seen[i], true) {
                return Err(PathError::InvalidOrder { len });
            }
        }
        self.destinations = order.iter().map(|&i| self.destinations[i]).collect();
        Ok(())
    }

    pub fn clear_destinations(&mut self) {
        self.destinations.clear();
    }

    /// Start followed by every destination.
    ///
    /// # Errors
    ///
    /// `MissingStart` without a start point, `InsufficientWaypoints` without
    /// any destination.
    pub fn waypoints(&self) -> PathResult<Vec<Coordinate>> {
        let start = self.start.ok_or(PathError::MissingStart)?;
        if self.destinations.is_empty() {
            return Err(PathError::InsufficientWaypoints(1));
        }
        let mut points = Vec::with_capacity(self.destinations.len() + 1);
        points.push(start);
        points.extend_from_slice(&self.destinations);
        Ok(points)
    }

    /// Interpolate the full route.
    pub fn to_path(&self, steps_per_leg: usize) -> PathResult<Vec<Coordinate>> {
        interpolate(&self.waypoints()?, steps_per_leg)
    }
}
