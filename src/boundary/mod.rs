//! Boundary resolution.
//!
//! Walks a parsed component sequence in written order, resolves every
//! component into concrete points and concatenates them into one closed
//! ring. This is the public entry point of the library: text in, WGS-84
//! polygon out.

use geo::{Coord, LineString, Point, Polygon};

use crate::border::{self, BorderError};
use crate::curve::{self, CurveError};
use crate::expression::{Component, ExpressionError};
use crate::provider::{BorderProvider, ProviderError};

#[cfg(test)]
mod tests;

/// Tuning knobs for boundary resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveOptions {
    /// Angular sampling step for arcs and circles, in degrees.
    pub angular_step_deg: f64,
    /// Maximum distance between a written border entry/exit point and its
    /// matched border vertex, in meters.
    pub border_tolerance_m: f64,
    /// Maximum disagreement between an arc endpoint's distance from the
    /// center and the stated radius, in meters.
    pub arc_tolerance_m: f64,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            angular_step_deg: 1.0,
            border_tolerance_m: 30.0,
            arc_tolerance_m: 30.0,
        }
    }
}

/// Errors that can occur while resolving a boundary expression.
///
/// Wraps the errors of the parsing and resolution stages so callers get
/// one error surface with the failing stage preserved.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundaryError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    /// An arc or border component is not flanked by plain vertices.
    #[error("the {kind} component at position {index} requires a plain vertex immediately {side} it")]
    MissingNeighborVertex {
        index: usize,
        kind: &'static str,
        side: &'static str,
    },
    /// A circle shares its expression with other components.
    #[error("a circle must be the only component of its expression, found {count} components")]
    CircleNotAlone { count: usize },
    /// The expression references a border but no provider was supplied.
    #[error("the expression references a border but no border provider was supplied")]
    MissingBorderProvider,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Border(#[from] BorderError),
    #[error(transparent)]
    Curve(#[from] CurveError),
    /// The resolved ring collapses to fewer than three distinct points.
    #[error("resolved ring has {distinct} distinct points, a polygon needs at least 3")]
    DegenerateRing { distinct: usize },
}

/// Resolves a boundary expression into a closed WGS-84 polygon.
///
/// The polygon's winding order is the order the components are written
/// in. Expressions without border references work without a provider.
///
/// Resolution is a pure function of its inputs: no state survives the
/// call, and resolving the same expression twice yields bit-identical
/// polygons.
pub fn resolve(
    expression: &str,
    provider: Option<&dyn BorderProvider>,
    options: &ResolveOptions,
) -> Result<Polygon<f64>, BoundaryError> {
    tracing::debug!("resolving boundary expression \"{}\"", expression);
    let components = crate::expression::parse(expression)?;

    if components
        .iter()
        .any(|c| matches!(c, Component::Circle { .. }))
        && components.len() > 1
    {
        return Err(BoundaryError::CircleNotAlone {
            count: components.len(),
        });
    }

    let mut ring: Vec<Coord<f64>> = Vec::new();
    for (index, component) in components.iter().enumerate() {
        match component {
            Component::Vertex(point) => push_point(&mut ring, point.0),
            Component::Circle { center, radius_nm } => {
                for point in curve::circle_points(*center, *radius_nm, options.angular_step_deg) {
                    push_point(&mut ring, point.0);
                }
            }
            Component::Arc {
                center,
                radius_nm,
                direction,
            } => {
                let entry = neighbor_vertex(&components, index, "arc", Side::Before)?;
                let exit = neighbor_vertex(&components, index, "arc", Side::After)?;
                let points = curve::arc_points(
                    *center,
                    entry,
                    exit,
                    *radius_nm,
                    *direction,
                    options.angular_step_deg,
                    options.arc_tolerance_m,
                )?;
                tracing::debug!("component {} resolved into {} arc points", index, points.len());
                for point in points {
                    push_point(&mut ring, point.0);
                }
            }
            Component::Border {
                name,
                inverse,
                reverse,
            } => {
                let entry = neighbor_vertex(&components, index, "border", Side::Before)?;
                let exit = neighbor_vertex(&components, index, "border", Side::After)?;
                let provider = provider.ok_or(BoundaryError::MissingBorderProvider)?;
                let line = provider.get_border(name)?;
                let mut segment = border::border_segment(
                    &line,
                    entry,
                    exit,
                    *inverse,
                    options.border_tolerance_m,
                )?;
                if *reverse {
                    segment.reverse();
                }
                tracing::debug!(
                    "component {} resolved into {} border vertices of \"{}\"",
                    index,
                    segment.len(),
                    name
                );
                for coord in segment {
                    push_point(&mut ring, coord);
                }
            }
        }
    }

    close_ring(&mut ring)?;
    Ok(Polygon::new(LineString::new(ring), vec![]))
}

/// Appends a point unless it repeats the previously emitted one, so
/// shared entry/exit vertices do not duplicate along component seams.
fn push_point(ring: &mut Vec<Coord<f64>>, coord: Coord<f64>) {
    if ring.last() != Some(&coord) {
        ring.push(coord);
    }
}

#[derive(Clone, Copy)]
enum Side {
    Before,
    After,
}

/// The plain vertex immediately before or after `index`, if any.
fn neighbor_vertex(
    components: &[Component],
    index: usize,
    kind: &'static str,
    side: Side,
) -> Result<Point<f64>, BoundaryError> {
    let neighbor = match side {
        Side::Before => index.checked_sub(1).and_then(|i| components.get(i)),
        Side::After => components.get(index + 1),
    };
    match neighbor {
        Some(Component::Vertex(point)) => Ok(*point),
        _ => Err(BoundaryError::MissingNeighborVertex {
            index,
            kind,
            side: match side {
                Side::Before => "before",
                Side::After => "after",
            },
        }),
    }
}

/// Closes the ring in place after checking it keeps at least three
/// distinct points.
fn close_ring(ring: &mut Vec<Coord<f64>>) -> Result<(), BoundaryError> {
    let closed = ring.len() > 1 && ring.first() == ring.last();
    let distinct = if closed { ring.len() - 1 } else { ring.len() };
    if distinct < 3 {
        return Err(BoundaryError::DegenerateRing { distinct });
    }
    if !closed {
        ring.push(ring[0]);
    }
    Ok(())
}
