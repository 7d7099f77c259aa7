//! `gf-geometry`: boundary and zone geometry with containment tests.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`ring`]       | `Bounds`, even-odd point-in-ring test                      |
//! | [`boundary`]   | `Boundary`: the closed outer ring                          |
//! | [`zone`]       | `Zone`: circle approximated by an N-gon                    |
//! | [`zone_set`]   | `ZoneSet`: active boundary + append-only zone list         |
//! | [`error`]      | `GeometryError`, `GeometryResult<T>`                       |
//!
//! # Coordinate space
//!
//! Containment is planar in (lon, lat) degrees, the same space the drawing
//! tools produce.  Zone circles are built on a spherical earth and then
//! tested in that planar space, so a zone and the boundary it sits in are
//! always compared with the same rule.

pub mod boundary;
pub mod error;
pub mod ring;
pub mod zone;
pub mod zone_set;

#[cfg(test)]
mod tests;

pub use boundary::Boundary;
pub use error::{GeometryError, GeometryResult};
pub use ring::Bounds;
pub use zone::Zone;
pub use zone_set::ZoneSet;

use gf_core::Coordinate;

/// Anything a point can be inside of.
pub trait Region {
    fn contains_point(&self, point: Coordinate) -> bool;
}

/// A missing region contains nothing.  Lets callers test "the current
/// boundary, if any" without branching.
impl<R: Region> Region for Option<R> {
    fn contains_point(&self, point: Coordinate) -> bool {
        self.as_ref().is_some_and(|r| r.contains_point(point))
    }
}

impl<R: Region + ?Sized> Region for &R {
    fn contains_point(&self, point: Coordinate) -> bool {
        (**self).contains_point(point)
    }
}

/// Free-function form of [`Region::contains_point`].
#[inline]
pub fn contains_point(region: &impl Region, point: Coordinate) -> bool {
    region.contains_point(point)
}
