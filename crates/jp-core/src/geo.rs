//! Geographic coordinate type and great-circle distance.
//!
//! Coordinates are `f64` degrees.  Node identity is decided by a 1e-6°
//! tolerance box, which is below `f32` resolution at city latitudes, so
//! single precision is not an option here.

/// Mean Earth radius used by every distance in the planner, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Two coordinates closer than this on both axes denote the same place.
pub const SAME_PLACE_EPS_DEG: f64 = 1e-6;

/// A WGS-84 coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }

    /// `true` if both axes differ by less than [`SAME_PLACE_EPS_DEG`].
    #[inline]
    pub fn same_place(self, other: GeoPoint) -> bool {
        (self.lat - other.lat).abs() < SAME_PLACE_EPS_DEG
            && (self.lon - other.lon).abs() < SAME_PLACE_EPS_DEG
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Great-circle distance between two lat/lon pairs (degrees), in kilometres.
///
/// Spherical earth of radius [`EARTH_RADIUS_KM`].
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon * 0.5).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Sum of the haversine lengths of consecutive polyline segments.
///
/// Empty and single-point polylines have length 0.
pub fn polyline_length_km(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance_km(w[1])).sum()
}
