//! Per-agent zone flags.

use gf_core::{Coordinate, ZoneId};
use gf_geometry::Zone;

use crate::{TrackerError, TrackerResult};

/// An enter or exit edge for one zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    Entered(ZoneId),
    Exited(ZoneId),
}

impl Transition {
    #[inline]
    pub fn zone(self) -> ZoneId {
        match self {
            Transition::Entered(z) | Transition::Exited(z) => z,
        }
    }
}

/// `inside[i]` is `true` while the agent is inside zone `i`.
///
/// The vector is kept parallel to the engine's zone list: it grows with
/// `false` when zones are added and shrinks when they are reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneStates {
    inside: Vec<bool>,
}

impl ZoneStates {
    /// All-`OUTSIDE` state for `zone_count` zones.
    pub fn new(zone_count: usize) -> Self {
        Self { inside: vec![false; zone_count] }
    }

    /// Put every zone back to `OUTSIDE`.
    pub fn reset(&mut self) {
        self.inside.fill(false);
    }

    /// Match a new zone count.  New zones start `OUTSIDE`; surplus flags are
    /// dropped.
    pub fn resize(&mut self, zone_count: usize) {
        self.inside.resize(zone_count, false);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inside.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }

    #[inline]
    pub fn is_inside(&self, zone: ZoneId) -> bool {
        self.inside.get(zone.index()).copied().unwrap_or(false)
    }

    /// Zones currently occupied, ascending.
    pub fn inside_zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.inside
            .iter()
            .enumerate()
            .filter(|(_, inside)| **inside)
            .map(|(i, _)| ZoneId(i as u32))
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.inside
    }

    /// Test `point` against every zone and update the flags.
    ///
    /// # Errors
    ///
    /// `ZoneCountMismatch` if the flags are not parallel to `zones`.  No flag
    /// is touched in that case.
    pub fn step(&mut self, zones: &[Zone], point: Coordinate) -> TrackerResult<Vec<Transition>> {
        let contained = self.check(zones, point)?;
        Ok(self.apply(&contained))
    }

    /// Read-only half of [`step`](Self::step): containment of `point` in
    /// every zone, in index order.
    ///
    /// Split out so callers can run the geometry for many agents in parallel
    /// and apply the results sequentially.
    pub fn check(&self, zones: &[Zone], point: Coordinate) -> TrackerResult<Vec<bool>> {
        if zones.len() != self.inside.len() {
            return Err(TrackerError::ZoneCountMismatch {
                tracked: self.inside.len(),
                zones:   zones.len(),
            });
        }
        Ok(zones.iter().map(|z| z.contains(point)).collect())
    }

    /// Write half of [`step`](Self::step).  `contained` must come from
    /// [`check`](Self::check) against the same zone list.
    pub fn apply(&mut self, contained: &[bool]) -> Vec<Transition> {
        let mut transitions = Vec::new();
        for (i, (&now, was)) in contained.iter().zip(self.inside.iter_mut()).enumerate() {
            let zone = ZoneId(i as u32);
            match (*was, now) {
                (false, true) => transitions.push(Transition::Entered(zone)),
                (true, false) => transitions.push(Transition::Exited(zone)),
                _ => {}
            }
            *was = now;
        }
        transitions
    }
}
