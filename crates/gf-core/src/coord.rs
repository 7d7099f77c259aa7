//! Geographic coordinate type and spherical-earth helpers.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Boundaries drawn by hand are
//! often only a few metres across, and path interpolation must hit its
//! waypoints exactly, so single precision is not enough here.

/// Mean earth radius in metres, shared by distance and destination math so
/// that a circle of radius `r` built with [`Coordinate::destination`] sits at
/// `r` according to [`Coordinate::distance_m`].
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A WGS-84 coordinate in decimal degrees.  Immutable value type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// The point reached by travelling `distance_m` metres from `self` along
    /// the initial great-circle bearing `bearing_deg` (clockwise from north).
    pub fn destination(self, bearing_deg: f64, distance_m: f64) -> Coordinate {
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let bearing = bearing_deg.to_radians();
        let delta = distance_m / EARTH_RADIUS_M;

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * delta.sin() * lat1.cos())
                .atan2(delta.cos() - lat1.sin() * lat2.sin());

        Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
    }

    /// Linear blend in latitude/longitude space (not geodesic).
    ///
    /// `t = 0` returns `self`, `t = 1` returns `other`; callers that need the
    /// endpoints bit-exact should use the endpoints directly.
    #[inline]
    pub fn lerp(self, other: Coordinate, t: f64) -> Coordinate {
        Coordinate::new(
            self.lat + (other.lat - self.lat) * t,
            self.lon + (other.lon - self.lon) * t,
        )
    }

    /// Approximate bounding-box check, much cheaper than `distance_m` for
    /// quick rejection.
    #[inline]
    pub fn within_bbox(self, center: Coordinate, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lon - center.lon).abs() <= half_deg
    }
}

impl From<(f64, f64)> for Coordinate {
    /// `(lat, lon)`: the order map click handlers report.
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Coordinate::new(lat, lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.5}, {:.5}]", self.lat, self.lon)
    }
}
