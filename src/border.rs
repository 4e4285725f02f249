//! Border segment extraction.
//!
//! A boundary description never lists a political border's vertices, it
//! writes an entry point, the border's name and an exit point. Resolving
//! that reference means finding the border vertices closest to the two
//! written points and walking the contour between them. The contour is
//! closed: walking past the last vertex wraps to the first.

use geo::{Coord, LineString, Point};

use crate::geodesy;

/// Errors that can occur when extracting a border segment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BorderError {
    /// The border line contains no vertices.
    #[error("border line has no vertices")]
    EmptyBorder,
    /// No border vertex lies within tolerance of a written entry/exit
    /// point.
    #[error(
        "point ({lon:.6}, {lat:.6}) is {distance_m:.1} m from the nearest border vertex, tolerance is {tolerance_m:.1} m"
    )]
    EntryNotFound {
        lon: f64,
        lat: f64,
        distance_m: f64,
        tolerance_m: f64,
    },
}

/// Finds the border vertex geodesically closest to `target`.
///
/// Returns the vertex index and its distance in meters, or `None` for an
/// empty line. Also useful on its own to audit how far published entry
/// points sit from the border dataset.
pub fn nearest_vertex(border: &LineString<f64>, target: Point<f64>) -> Option<(usize, f64)> {
    border
        .0
        .iter()
        .enumerate()
        .map(|(index, coord)| (index, geodesy::distance_m(Point::from(*coord), target)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Extracts the ordered border sub-sequence between `entry` and `exit`.
///
/// Both endpoints are matched to their nearest border vertex, which must
/// lie within `tolerance_m`. The walk steps forward through the contour,
/// or backward when `inverse` is set, wrapping modulo the vertex count,
/// and includes both matched vertices. Matching entry and exit to the
/// same vertex yields that single vertex.
pub fn border_segment(
    border: &LineString<f64>,
    entry: Point<f64>,
    exit: Point<f64>,
    inverse: bool,
    tolerance_m: f64,
) -> Result<Vec<Coord<f64>>, BorderError> {
    let entry_index = match_endpoint(border, entry, tolerance_m)?;
    let exit_index = match_endpoint(border, exit, tolerance_m)?;
    tracing::debug!(
        "matched border endpoints: entry vertex {}, exit vertex {}, inverse {}",
        entry_index,
        exit_index,
        inverse
    );

    let len = border.0.len();
    let mut points = Vec::new();
    let mut index = entry_index;
    loop {
        points.push(border.0[index]);
        if index == exit_index {
            break;
        }
        index = if inverse {
            (index + len - 1) % len
        } else {
            (index + 1) % len
        };
    }
    Ok(points)
}

fn match_endpoint(
    border: &LineString<f64>,
    target: Point<f64>,
    tolerance_m: f64,
) -> Result<usize, BorderError> {
    let (index, distance_m) = nearest_vertex(border, target).ok_or(BorderError::EmptyBorder)?;
    if distance_m > tolerance_m {
        return Err(BorderError::EntryNotFound {
            lon: target.x(),
            lat: target.y(),
            distance_m,
            tolerance_m,
        });
    }
    Ok(index)
}
