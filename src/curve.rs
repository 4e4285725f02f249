//! Arc and circle sampling.
//!
//! Curved boundary sections are resolved into dense point sequences on
//! the WGS-84 ellipsoid: bearings are swept around the center and each
//! sample is placed with the direct geodetic problem.

use geo::Point;

use crate::expression::Direction;
use crate::geodesy;

/// Errors that can occur when sampling an arc.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// An arc endpoint does not lie at the stated radius from the center.
    #[error(
        "{endpoint} point is {measured_m:.1} m from the arc center, the stated radius is {radius_m:.1} m (tolerance {tolerance_m:.1} m)"
    )]
    RadiusMismatch {
        endpoint: &'static str,
        measured_m: f64,
        radius_m: f64,
        tolerance_m: f64,
    },
}

/// Samples an arc from `entry` to `exit` around `center`.
///
/// The sweep runs in the requested rotational direction from the entry
/// bearing to the exit bearing, one sample every `step_deg`. The given
/// entry and exit points bound the result exactly so consecutive
/// components chain without seams; only interior points are computed.
///
/// # Errors
///
/// [`CurveError::RadiusMismatch`] when an endpoint's distance from the
/// center disagrees with `radius_nm` by more than `tolerance_m`.
pub fn arc_points(
    center: Point<f64>,
    entry: Point<f64>,
    exit: Point<f64>,
    radius_nm: f64,
    direction: Direction,
    step_deg: f64,
    tolerance_m: f64,
) -> Result<Vec<Point<f64>>, CurveError> {
    let radius_m = geodesy::nm_to_meters(radius_nm);
    check_radius("entry", center, entry, radius_m, tolerance_m)?;
    check_radius("exit", center, exit, radius_m, tolerance_m)?;

    let entry_bearing = geodesy::inverse(center, entry).initial_bearing_deg;
    let exit_bearing = geodesy::inverse(center, exit).initial_bearing_deg;
    let (span_deg, sign) = match direction {
        Direction::Clockwise => (geodesy::normalize_bearing(exit_bearing - entry_bearing), 1.0),
        Direction::CounterClockwise => (
            geodesy::normalize_bearing(entry_bearing - exit_bearing),
            -1.0,
        ),
    };
    tracing::debug!(
        "sampling arc: entry bearing {:.3}, exit bearing {:.3}, span {:.3}, step {}",
        entry_bearing,
        exit_bearing,
        span_deg,
        step_deg
    );

    let interior_steps = (span_deg / step_deg).ceil() as usize;
    let mut points = Vec::with_capacity(interior_steps + 1);
    points.push(entry);
    for k in 1..interior_steps {
        let bearing = geodesy::normalize_bearing(entry_bearing + sign * k as f64 * step_deg);
        points.push(geodesy::destination(center, bearing, radius_m));
    }
    points.push(exit);
    Ok(points)
}

/// Samples a full circle around `center`, sweeping from bearing 0 in one
/// `step_deg` increment per point.
///
/// The ring is left open; closing it is the assembler's concern.
pub fn circle_points(center: Point<f64>, radius_nm: f64, step_deg: f64) -> Vec<Point<f64>> {
    let radius_m = geodesy::nm_to_meters(radius_nm);
    let samples = (360.0 / step_deg).ceil() as usize;
    (0..samples)
        .map(|k| {
            let bearing = geodesy::normalize_bearing(k as f64 * step_deg);
            geodesy::destination(center, bearing, radius_m)
        })
        .collect()
}

fn check_radius(
    endpoint: &'static str,
    center: Point<f64>,
    point: Point<f64>,
    radius_m: f64,
    tolerance_m: f64,
) -> Result<(), CurveError> {
    let measured_m = geodesy::distance_m(center, point);
    if (measured_m - radius_m).abs() > tolerance_m {
        return Err(CurveError::RadiusMismatch {
            endpoint,
            measured_m,
            radius_m,
            tolerance_m,
        });
    }
    Ok(())
}
