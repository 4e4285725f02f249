//! Geometry component classification.
//!
//! Each token of a boundary expression is one of four component shapes:
//! a plain DMS vertex, an `ARC(center, radius, direction)`, a
//! `CIRCLE(center, radius)` or a `BORDER(name[, I][, R])` reference.
//! Classification is structural: the first pattern that matches wins,
//! and a token matching no pattern is rejected.

use std::sync::OnceLock;

use geo::Point;
use regex::Regex;

use crate::dms::{self, DmsError};

/// Rotational direction of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing bearing as seen from the arc center
    Clockwise,
    /// Decreasing bearing as seen from the arc center
    CounterClockwise,
}

/// One parsed component of a boundary expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// A polygon vertex.
    Vertex(Point<f64>),
    /// A circular arc between the neighboring vertices.
    Arc {
        center: Point<f64>,
        radius_nm: f64,
        direction: Direction,
    },
    /// A full circle; must be the only component of its expression.
    Circle { center: Point<f64>, radius_nm: f64 },
    /// A segment of a named political border between the neighboring
    /// vertices.
    Border {
        name: String,
        /// Traverse the border contour in reverse vertex order.
        inverse: bool,
        /// Flip the resolved segment before emitting it.
        reverse: bool,
    },
}

/// Errors that can occur when classifying a component token.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComponentError {
    /// A coordinate inside the token failed to parse.
    #[error(transparent)]
    Coordinate(#[from] DmsError),
    /// A radius parameter is not a positive number.
    #[error("radius \"{radius}\" in component \"{token}\" must be a positive number")]
    InvalidRadius { token: String, radius: String },
    /// An arc direction is neither `cw` nor `ccw`.
    #[error("direction \"{direction}\" in component \"{token}\" must be cw or ccw")]
    InvalidDirection { token: String, direction: String },
    /// The token matches no known component pattern.
    #[error("component \"{0}\" matches no known geometry pattern")]
    Unrecognized(String),
}

fn arc_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^ARC\((?P<center>[\d NSEW/.]+), (?P<radius>[\d.]+), (?P<direction>[a-zA-Z]+)\)$")
            .expect("ARC pattern is valid")
    })
}

fn circle_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^CIRCLE\((?P<center>[\d NSEW/.]+), (?P<radius>[\d.]+)\)$")
            .expect("CIRCLE pattern is valid")
    })
}

fn border_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^BORDER\((?P<name>[A-Z+]+)(?P<inverse>, I)?(?P<reverse>, R)?\)$")
            .expect("BORDER pattern is valid")
    })
}

/// Classifies and parses a single expression token.
pub fn parse_component(token: &str) -> Result<Component, ComponentError> {
    if let Some(captures) = arc_regex().captures(token) {
        let center = dms::parse(&captures["center"])?;
        let radius_nm = parse_radius(token, &captures["radius"])?;
        let direction = parse_direction(token, &captures["direction"])?;
        return Ok(Component::Arc {
            center,
            radius_nm,
            direction,
        });
    }
    if let Some(captures) = circle_regex().captures(token) {
        let center = dms::parse(&captures["center"])?;
        let radius_nm = parse_radius(token, &captures["radius"])?;
        return Ok(Component::Circle { center, radius_nm });
    }
    if let Some(captures) = border_regex().captures(token) {
        return Ok(Component::Border {
            name: captures["name"].to_string(),
            inverse: captures.name("inverse").is_some(),
            reverse: captures.name("reverse").is_some(),
        });
    }
    match dms::parse(token) {
        Ok(point) => Ok(Component::Vertex(point)),
        // A DMS-shaped token with invalid ranges is a coordinate error,
        // anything else simply matches no pattern.
        Err(error @ DmsError::OutOfRange { .. }) => Err(error.into()),
        Err(DmsError::InvalidFormat(_)) => Err(ComponentError::Unrecognized(token.to_string())),
    }
}

fn parse_radius(token: &str, radius: &str) -> Result<f64, ComponentError> {
    let value: f64 = radius.parse().map_err(|_| ComponentError::InvalidRadius {
        token: token.to_string(),
        radius: radius.to_string(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ComponentError::InvalidRadius {
            token: token.to_string(),
            radius: radius.to_string(),
        });
    }
    Ok(value)
}

fn parse_direction(token: &str, direction: &str) -> Result<Direction, ComponentError> {
    if direction.eq_ignore_ascii_case("cw") {
        Ok(Direction::Clockwise)
    } else if direction.eq_ignore_ascii_case("ccw") {
        Ok(Direction::CounterClockwise)
    } else {
        Err(ComponentError::InvalidDirection {
            token: token.to_string(),
            direction: direction.to_string(),
        })
    }
}
