//! Closed-ring primitives shared by boundaries and zones.

use gf_core::Coordinate;

/// Tolerance for the on-edge test, in degrees².
const EDGE_EPS: f64 = 1e-18;

/// Axis-aligned bounding box in degrees, used to reject far points before
/// walking the ring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Bounding box of `points`.  Returns an inverted (empty) box for an
    /// empty slice, which contains nothing.
    pub fn of(points: &[Coordinate]) -> Self {
        points.iter().fold(
            Bounds {
                min_lat: f64::INFINITY,
                max_lat: f64::NEG_INFINITY,
                min_lon: f64::INFINITY,
                max_lon: f64::NEG_INFINITY,
            },
            |b, p| Bounds {
                min_lat: b.min_lat.min(p.lat),
                max_lat: b.max_lat.max(p.lat),
                min_lon: b.min_lon.min(p.lon),
                max_lon: b.max_lon.max(p.lon),
            },
        )
    }

    #[inline]
    pub fn contains(&self, p: Coordinate) -> bool {
        p.lat >= self.min_lat && p.lat <= self.max_lat
            && p.lon >= self.min_lon && p.lon <= self.max_lon
    }
}

/// Even-odd point-in-polygon over a closed ring (first point repeated last).
///
/// Points lying exactly on an edge count as inside.
pub fn ring_contains(ring: &[Coordinate], p: Coordinate) -> bool {
    let mut inside = false;
    for edge in ring.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if on_segment(a, b, p) {
            return true;
        }
        // Half-open rule on latitude so a vertex shared by two edges is
        // counted once.
        if (a.lat > p.lat) != (b.lat > p.lat) {
            let x = a.lon + (p.lat - a.lat) * (b.lon - a.lon) / (b.lat - a.lat);
            if p.lon < x {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_segment(a: Coordinate, b: Coordinate, p: Coordinate) -> bool {
    let cross = (b.lon - a.lon) * (p.lat - a.lat) - (b.lat - a.lat) * (p.lon - a.lon);
    if cross.abs() > EDGE_EPS {
        return false;
    }
    p.lon >= a.lon.min(b.lon) && p.lon <= a.lon.max(b.lon)
        && p.lat >= a.lat.min(b.lat) && p.lat <= a.lat.max(b.lat)
}

/// Close `points` into a ring by appending the first point unless it is
/// already the last one.
pub(crate) fn close(mut points: Vec<Coordinate>) -> Vec<Coordinate> {
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            points.push(first);
        }
    }
    points
}
