//! Degrees-minutes-seconds coordinate notation.
//!
//! Aeronautical publications print coordinates as paired DMS groups with
//! hemisphere letters, e.g. `46 27 18 N 006 37 35 E` or
//! `46 27 18 N / 006 37 35 E`. Latitude degrees are two digits, longitude
//! degrees three (zero-padded), seconds may carry a decimal fraction.

use std::sync::OnceLock;

use geo::Point;
use regex::Regex;

/// Errors that can occur when parsing a DMS coordinate pair.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DmsError {
    /// Text does not match the DMS grammar at all.
    #[error("\"{0}\" does not match the degrees minutes seconds grammar")]
    InvalidFormat(String),
    /// Text matches the grammar but a field is out of range.
    #[error("\"{text}\" is out of range: {reason}")]
    OutOfRange { text: String, reason: String },
}

fn dms_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^(?P<deg_lat>\d{2}) (?P<min_lat>\d{2}) (?P<sec_lat>[\d.]{2,5}) (?P<hem_lat>[NS]) (?:/ )?(?P<deg_lon>\d{3}) (?P<min_lon>\d{2}) (?P<sec_lon>[\d.]{2,5}) (?P<hem_lon>[EW])$",
        )
        .expect("DMS pattern is valid")
    })
}

/// Parses a DMS coordinate pair into a point (x = longitude, y = latitude,
/// decimal degrees).
///
/// # Errors
///
/// [`DmsError::InvalidFormat`] when the text does not match the grammar,
/// [`DmsError::OutOfRange`] when minutes, seconds or the resulting
/// coordinate exceed their valid ranges.
pub fn parse(text: &str) -> Result<Point<f64>, DmsError> {
    let captures = dms_regex()
        .captures(text)
        .ok_or_else(|| DmsError::InvalidFormat(text.to_string()))?;

    let lat = to_decimal(
        text,
        &captures["deg_lat"],
        &captures["min_lat"],
        &captures["sec_lat"],
        90.0,
        "latitude",
    )?;
    let lon = to_decimal(
        text,
        &captures["deg_lon"],
        &captures["min_lon"],
        &captures["sec_lon"],
        180.0,
        "longitude",
    )?;

    let lat = match &captures["hem_lat"] {
        "N" => lat,
        _ => -lat,
    };
    let lon = match &captures["hem_lon"] {
        "E" => lon,
        _ => -lon,
    };

    Ok(Point::new(lon, lat))
}

/// Formats a point as a canonical DMS coordinate pair,
/// `DD MM SS.ss N / DDD MM SS.ss E`.
///
/// Seconds are rounded to hundredths, the finest resolution the grammar
/// can carry; parsing the result recovers the coordinate to within that
/// resolution (about 3e-6 degrees).
pub fn format(point: Point<f64>) -> String {
    let (lat_deg, lat_min, lat_sec) = to_fields(point.y());
    let (lon_deg, lon_min, lon_sec) = to_fields(point.x());
    let hem_lat = if point.y() < 0.0 { "S" } else { "N" };
    let hem_lon = if point.x() < 0.0 { "W" } else { "E" };
    format!(
        "{lat_deg:02} {lat_min:02} {lat_sec:05.2} {hem_lat} / {lon_deg:03} {lon_min:02} {lon_sec:05.2} {hem_lon}"
    )
}

fn to_decimal(
    text: &str,
    degrees: &str,
    minutes: &str,
    seconds: &str,
    limit: f64,
    axis: &str,
) -> Result<f64, DmsError> {
    let degrees: u32 = degrees.parse().expect("regex guarantees digits");
    let minutes: u32 = minutes.parse().expect("regex guarantees digits");
    let seconds: f64 = seconds
        .parse()
        .map_err(|_| DmsError::InvalidFormat(text.to_string()))?;

    if minutes >= 60 {
        return Err(DmsError::OutOfRange {
            text: text.to_string(),
            reason: format!("{axis} minutes {minutes} must be below 60"),
        });
    }
    if seconds >= 60.0 {
        return Err(DmsError::OutOfRange {
            text: text.to_string(),
            reason: format!("{axis} seconds {seconds} must be below 60"),
        });
    }

    let value = f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0;
    if value > limit {
        return Err(DmsError::OutOfRange {
            text: text.to_string(),
            reason: format!("{axis} {value} exceeds {limit} degrees"),
        });
    }
    Ok(value)
}

/// Splits an absolute decimal degree value into degree, minute and
/// centisecond-rounded second fields.
fn to_fields(value: f64) -> (u64, u64, f64) {
    let centiseconds = (value.abs() * 360_000.0).round() as u64;
    let degrees = centiseconds / 360_000;
    let remainder = centiseconds % 360_000;
    let minutes = remainder / 6_000;
    let seconds = (remainder % 6_000) as f64 / 100.0;
    (degrees, minutes, seconds)
}
