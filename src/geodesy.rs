//! WGS-84 geodesic computations.
//!
//! Thin wrappers around the `geo` crate's geodesic measure (Karney's
//! algorithms) exposing the direct and inverse problems in the shape the
//! rest of the library needs: bearings in degrees clockwise from true
//! north, distances in meters.

use geo::{Bearing, Destination, Distance, Geodesic, Point};

/// Meters per international nautical mile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Converts nautical miles to meters.
#[inline]
pub fn nm_to_meters(nm: f64) -> f64 {
    nm * METERS_PER_NAUTICAL_MILE
}

/// Solution of the inverse geodetic problem between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// Geodesic distance in meters
    pub distance_m: f64,
    /// Bearing at the first point, degrees in [0, 360)
    pub initial_bearing_deg: f64,
    /// Bearing at the second point, degrees in [0, 360)
    pub final_bearing_deg: f64,
}

/// Solves the inverse geodetic problem: distance and bearings between
/// two points on the WGS-84 ellipsoid.
pub fn inverse(a: Point<f64>, b: Point<f64>) -> InverseSolution {
    let distance_m = Geodesic.distance(a, b);
    let initial_bearing_deg = normalize_bearing(Geodesic.bearing(a, b));
    // The bearing at arrival is the back-bearing from b to a, flipped.
    let final_bearing_deg = normalize_bearing(Geodesic.bearing(b, a) + 180.0);
    InverseSolution {
        distance_m,
        initial_bearing_deg,
        final_bearing_deg,
    }
}

/// Solves the direct geodetic problem: the point reached from `origin`
/// by traveling `distance_m` meters along `bearing_deg`.
#[inline]
pub fn destination(origin: Point<f64>, bearing_deg: f64, distance_m: f64) -> Point<f64> {
    Geodesic.destination(origin, bearing_deg, distance_m)
}

/// Geodesic distance between two points in meters.
#[inline]
pub fn distance_m(a: Point<f64>, b: Point<f64>) -> f64 {
    Geodesic.distance(a, b)
}

/// Folds any angle in degrees into [0, 360).
#[inline]
pub fn normalize_bearing(bearing_deg: f64) -> f64 {
    bearing_deg.rem_euclid(360.0)
}
