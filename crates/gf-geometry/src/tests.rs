//! Unit tests for gf-geometry.
//!
//! Property-style checks use a seeded `SmallRng` so failures reproduce.

#[cfg(test)]
mod helpers {
    use gf_core::Coordinate;

    /// Unit square (lat, lon): (0,0)-(0,1)-(1,1)-(1,0).
    pub fn unit_square() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(1.0, 0.0),
        ]
    }

    fn cross(o: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
        (a.lon - o.lon) * (b.lat - o.lat) - (a.lat - o.lat) * (b.lon - o.lon)
    }

    /// Counter-clockwise convex hull (monotone chain) in (lon, lat) space.
    pub fn convex_hull(points: &[Coordinate]) -> Vec<Coordinate> {
        let mut pts = points.to_vec();
        pts.sort_by(|a, b| a.lon.total_cmp(&b.lon).then(a.lat.total_cmp(&b.lat)));
        let mut lower: Vec<Coordinate> = Vec::new();
        for &p in &pts {
            while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
                lower.pop();
            }
            lower.push(p);
        }
        let mut upper: Vec<Coordinate> = Vec::new();
        for &p in pts.iter().rev() {
            while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
                upper.pop();
            }
            upper.push(p);
        }
        lower.pop();
        upper.pop();
        lower.extend(upper);
        lower
    }

    /// `true` if `p` lies strictly outside the CCW hull by more than `margin`.
    pub fn strictly_outside(hull: &[Coordinate], p: Coordinate, margin: f64) -> bool {
        (0..hull.len()).any(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let len = ((b.lon - a.lon).powi(2) + (b.lat - a.lat).powi(2)).sqrt();
            cross(a, b, p) / len < -margin
        })
    }
}

// ── Boundary construction ─────────────────────────────────────────────────────

#[cfg(test)]
mod boundary {
    use gf_core::Coordinate;

    use super::helpers::unit_square;
    use crate::{Boundary, GeometryError};

    #[test]
    fn open_ring_is_closed() {
        let b = Boundary::new(unit_square()).unwrap();
        assert_eq!(b.ring().len(), 5);
        assert_eq!(b.ring().first(), b.ring().last());
        assert_eq!(b.vertices().len(), 4);
    }

    #[test]
    fn closed_ring_is_not_closed_twice() {
        let mut pts = unit_square();
        pts.push(pts[0]);
        let b = Boundary::new(pts).unwrap();
        assert_eq!(b.ring().len(), 5);
    }

    #[test]
    fn fewer_than_three_distinct_points_rejected() {
        let a = Coordinate::new(0.0, 0.0);
        let c = Coordinate::new(1.0, 1.0);
        for pts in [vec![], vec![a], vec![a, c], vec![a, c, a], vec![a, a, a, c]] {
            assert!(
                matches!(Boundary::new(pts.clone()), Err(GeometryError::InvalidGeometry(_))),
                "{pts:?}"
            );
        }
    }

    #[test]
    fn non_finite_rejected() {
        let mut pts = unit_square();
        pts[2] = Coordinate::new(f64::NAN, 1.0);
        assert!(matches!(Boundary::new(pts), Err(GeometryError::InvalidGeometry(_))));
    }
}

// ── Boundary containment ──────────────────────────────────────────────────────

#[cfg(test)]
mod boundary_contains {
    use gf_core::Coordinate;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::helpers::{convex_hull, strictly_outside, unit_square};
    use crate::{Boundary, Region, contains_point};

    #[test]
    fn square_interior_and_exterior() {
        let b = Boundary::new(unit_square()).unwrap();
        assert!(b.contains(Coordinate::new(0.5, 0.5)));
        assert!(b.contains(Coordinate::new(0.01, 0.99)));
        assert!(!b.contains(Coordinate::new(1.5, 0.5)));
        assert!(!b.contains(Coordinate::new(0.5, -0.01)));
    }

    #[test]
    fn edges_and_vertices_count_as_inside() {
        let b = Boundary::new(unit_square()).unwrap();
        assert!(b.contains(Coordinate::new(0.0, 0.5)));
        assert!(b.contains(Coordinate::new(1.0, 1.0)));
        assert!(b.contains(Coordinate::new(0.5, 1.0)));
    }

    #[test]
    fn concave_notch_is_outside() {
        // A "U" shape: the notch between the arms is outside.
        let b = Boundary::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 3.0),
            Coordinate::new(3.0, 3.0),
            Coordinate::new(3.0, 2.0),
            Coordinate::new(1.0, 2.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(3.0, 1.0),
            Coordinate::new(3.0, 0.0),
        ])
        .unwrap();
        assert!(!b.contains(Coordinate::new(2.0, 1.5)), "inside the notch");
        assert!(b.contains(Coordinate::new(2.0, 0.5)), "lower arm");
        assert!(b.contains(Coordinate::new(2.0, 2.5)), "upper arm");
        assert!(b.contains(Coordinate::new(0.5, 1.5)), "base");
    }

    #[test]
    fn missing_region_contains_nothing() {
        let none: Option<Boundary> = None;
        assert!(!contains_point(&none, Coordinate::new(0.5, 0.5)));
        let some = Some(Boundary::new(unit_square()).unwrap());
        assert!(some.contains_point(Coordinate::new(0.5, 0.5)));
    }

    #[test]
    fn points_outside_convex_hull_are_never_contained() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            // Star-shaped random polygon around (10, 106).
            let n = rng.gen_range(3..12);
            let mut angles: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..std::f64::consts::TAU)).collect();
            angles.sort_by(f64::total_cmp);
            let pts: Vec<Coordinate> = angles
                .iter()
                .map(|a| {
                    let r = rng.gen_range(0.01..0.05);
                    Coordinate::new(10.0 + r * a.sin(), 106.0 + r * a.cos())
                })
                .collect();
            let Ok(boundary) = Boundary::new(pts.clone()) else { continue };
            let hull = convex_hull(&pts);

            for _ in 0..200 {
                let p = Coordinate::new(rng.gen_range(9.9..10.1), rng.gen_range(105.9..106.1));
                if hull.len() >= 3 && strictly_outside(&hull, p, 1e-9) {
                    assert!(!boundary.contains(p), "{p:?} outside hull but contained");
                }
            }
        }
    }
}

// ── Zones ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod zone {
    use gf_core::{Coordinate, ZoneId};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{GeometryError, Zone};

    #[test]
    fn polygon_has_requested_resolution() {
        let z = Zone::new(ZoneId(0), Coordinate::new(10.76, 106.66), 100.0, 64).unwrap();
        assert_eq!(z.segments(), 64);
        assert_eq!(z.ring().len(), 65);
        assert_eq!(z.ring().first(), z.ring().last());
    }

    #[test]
    fn vertices_lie_on_the_circle() {
        let center = Coordinate::new(10.76, 106.66);
        let z = Zone::new(ZoneId(0), center, 300.0, 16).unwrap();
        for v in z.ring() {
            assert!((center.distance_m(*v) - 300.0).abs() < 1e-6);
        }
    }

    #[test]
    fn invalid_radius_rejected() {
        let c = Coordinate::new(0.0, 0.0);
        for r in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(Zone::new(ZoneId(0), c, r, 64), Err(GeometryError::InvalidRadius(_))));
        }
    }

    #[test]
    fn too_few_segments_rejected() {
        let c = Coordinate::new(0.0, 0.0);
        assert!(matches!(Zone::new(ZoneId(0), c, 10.0, 2), Err(GeometryError::InvalidGeometry(_))));
    }

    #[test]
    fn distance_inside_and_outside_radius() {
        let mut rng = SmallRng::seed_from_u64(99);
        for (center, radius) in [
            (Coordinate::new(10.762622, 106.660172), 150.0),
            (Coordinate::new(0.5, 0.5), 50_000.0),
            (Coordinate::new(-33.86, 151.21), 2_000.0),
        ] {
            let z = Zone::new(ZoneId(0), center, radius, 64).unwrap();
            for _ in 0..500 {
                let bearing = rng.gen_range(0.0..360.0);
                let inner = center.destination(bearing, rng.gen_range(0.0..radius * 0.99));
                let outer = center.destination(bearing, rng.gen_range(radius * 1.01..radius * 2.0));
                assert!(z.contains(inner), "d < r should be inside");
                assert!(!z.contains(outer), "d > r should be outside");
            }
        }
    }
}

// ── ZoneSet ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod zone_set {
    use gf_core::{Coordinate, ZoneId};

    use super::helpers::unit_square;
    use crate::{GeometryError, ZoneSet};

    #[test]
    fn zone_requires_boundary() {
        let mut set = ZoneSet::new(10, 64);
        let err = set.add_zone(Coordinate::new(0.5, 0.5), 100.0).unwrap_err();
        assert_eq!(err, GeometryError::BoundaryNotSet);
        assert!(!set.boundary_contains(Coordinate::new(0.5, 0.5)));
    }

    #[test]
    fn zones_get_sequential_ids() {
        let mut set = ZoneSet::new(10, 64);
        set.set_boundary(unit_square()).unwrap();
        let a = set.add_zone(Coordinate::new(0.2, 0.2), 1_000.0).unwrap().id;
        let b = set.add_zone(Coordinate::new(0.8, 0.8), 1_000.0).unwrap().id;
        assert_eq!((a, b), (ZoneId(0), ZoneId(1)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.zone(ZoneId(1)).unwrap().center, Coordinate::new(0.8, 0.8));
    }

    #[test]
    fn center_outside_boundary_rejected() {
        let mut set = ZoneSet::new(10, 64);
        set.set_boundary(unit_square()).unwrap();
        let p = Coordinate::new(2.0, 2.0);
        assert_eq!(set.add_zone(p, 10.0).unwrap_err(), GeometryError::OutOfBounds(p));
        assert!(set.is_empty());
    }

    #[test]
    fn radius_checked_before_position() {
        let mut set = ZoneSet::new(10, 64);
        set.set_boundary(unit_square()).unwrap();
        let err = set.add_zone(Coordinate::new(2.0, 2.0), -1.0).unwrap_err();
        assert_eq!(err, GeometryError::InvalidRadius(-1.0));
    }

    #[test]
    fn zone_limit_enforced() {
        let mut set = ZoneSet::new(2, 64);
        set.set_boundary(unit_square()).unwrap();
        set.add_zone(Coordinate::new(0.2, 0.2), 10.0).unwrap();
        set.add_zone(Coordinate::new(0.4, 0.4), 10.0).unwrap();
        let err = set.add_zone(Coordinate::new(0.6, 0.6), 10.0).unwrap_err();
        assert_eq!(err, GeometryError::ZoneLimitReached { max: 2 });
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn replacing_boundary_drops_zones() {
        let mut set = ZoneSet::new(10, 64);
        set.set_boundary(unit_square()).unwrap();
        set.add_zone(Coordinate::new(0.5, 0.5), 10.0).unwrap();
        let cleared = set.set_boundary(unit_square()).unwrap();
        assert_eq!(cleared, 1);
        assert!(set.is_empty());
    }

    #[test]
    fn invalid_replacement_keeps_previous_state() {
        let mut set = ZoneSet::new(10, 64);
        set.set_boundary(unit_square()).unwrap();
        set.add_zone(Coordinate::new(0.5, 0.5), 10.0).unwrap();
        assert!(set.set_boundary(vec![Coordinate::new(0.0, 0.0)]).is_err());
        assert!(set.boundary().is_some());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clear_boundary_resets_everything() {
        let mut set = ZoneSet::new(10, 64);
        assert_eq!(set.clear_boundary(), None);
        set.set_boundary(unit_square()).unwrap();
        set.add_zone(Coordinate::new(0.5, 0.5), 10.0).unwrap();
        assert_eq!(set.clear_boundary(), Some(1));
        assert!(set.boundary().is_none());
        assert!(set.is_empty());
        assert!(!set.boundary_contains(Coordinate::new(0.5, 0.5)));
    }
}
