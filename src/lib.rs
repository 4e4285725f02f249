//! aipgeom - airspace boundary geometry resolver
//!
//! Aeronautical publications describe airspace boundaries as text: a chain
//! of coordinates, arcs, circles and references to political border lines,
//! separated by dashes. This library parses such descriptions and resolves
//! them into closed polygons on the WGS-84 ellipsoid.
//!
//! # High-Level API
//!
//! The [`boundary`] module is the entry point. Border references are looked
//! up through a [`provider::BorderProvider`]; expressions without borders
//! need no provider at all:
//!
//! ```
//! use aipgeom::boundary::{self, ResolveOptions};
//!
//! let polygon = boundary::resolve(
//!     "CIRCLE(46 45 33 N / 009 05 17 E, 5.4)",
//!     None,
//!     &ResolveOptions::default(),
//! ).unwrap();
//!
//! // 360 sampled points at 1 degree spacing, plus the closing point
//! assert_eq!(polygon.exterior().0.len(), 361);
//! ```

pub mod border;
pub mod boundary;
pub mod curve;
pub mod dms;
pub mod expression;
pub mod geodesy;
pub mod provider;

/// Version of the aipgeom library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
