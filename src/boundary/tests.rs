//! Tests for boundary resolution.

use super::*;
use crate::dms;
use crate::geodesy;
use crate::provider::StaticBorderProvider;

fn point(text: &str) -> Point<f64> {
    dms::parse(text).unwrap()
}

/// Square border roughly 15 x 22 km, vertices on whole arcminutes.
fn square_provider() -> StaticBorderProvider {
    let mut provider = StaticBorderProvider::new();
    provider.insert(
        "CH",
        LineString::from(vec![
            point("46 00 00 N 006 00 00 E"),
            point("46 00 00 N 006 12 00 E"),
            point("46 12 00 N 006 12 00 E"),
            point("46 12 00 N 006 00 00 E"),
        ]),
    );
    provider
}

#[test]
fn test_vertex_triangle_closes_ring() {
    let polygon = resolve(
        "46 20 00 N 006 30 00 E - 46 20 00 N 006 50 00 E - 46 30 00 N 006 40 00 E",
        None,
        &ResolveOptions::default(),
    )
    .unwrap();
    let ring = &polygon.exterior().0;
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.first(), ring.last());
    assert_eq!(ring[0], point("46 20 00 N 006 30 00 E").0);
    assert_eq!(ring[1], point("46 20 00 N 006 50 00 E").0);
    assert_eq!(ring[2], point("46 30 00 N 006 40 00 E").0);
}

#[test]
fn test_explicitly_closed_expression_is_not_double_closed() {
    let polygon = resolve(
        "46 20 00 N 006 30 00 E - 46 20 00 N 006 50 00 E - 46 30 00 N 006 40 00 E - 46 20 00 N 006 30 00 E",
        None,
        &ResolveOptions::default(),
    )
    .unwrap();
    assert_eq!(polygon.exterior().0.len(), 4);
}

#[test]
fn test_lone_circle_resolves_to_full_ring() {
    let polygon = resolve(
        "CIRCLE(46 45 33 N / 009 05 17 E, 5.4)",
        None,
        &ResolveOptions::default(),
    )
    .unwrap();
    let ring = &polygon.exterior().0;
    assert_eq!(ring.len(), 361);
    assert_eq!(ring.first(), ring.last());

    let center = point("46 45 33 N / 009 05 17 E");
    let radius_m = geodesy::nm_to_meters(5.4);
    for coord in ring {
        let distance = geodesy::distance_m(center, Point::from(*coord));
        assert!(
            (distance - radius_m).abs() < 1.0,
            "ring point at {distance} m, expected {radius_m} m"
        );
    }
}

#[test]
fn test_circle_next_to_other_components_is_rejected() {
    let result = resolve(
        "46 45 33 N 009 05 17 E - CIRCLE(46 45 33 N / 009 05 17 E, 5.4)",
        None,
        &ResolveOptions::default(),
    );
    assert_eq!(result, Err(BoundaryError::CircleNotAlone { count: 2 }));
}

#[test]
fn test_arc_connects_its_neighbor_vertices() {
    // Entry five arcminutes north of the center, exit five south; at this
    // latitude both sit within a few meters of the 5 NM radius.
    let polygon = resolve(
        "47 05 00 N 007 00 00 E - ARC(47 00 00 N 007 00 00 E, 5.0, cw) - 46 55 00 N 007 00 00 E",
        None,
        &ResolveOptions::default(),
    )
    .unwrap();
    let ring = &polygon.exterior().0;
    // 180 degree sweep sampled every degree, plus the closing point
    assert!(
        (181..=183).contains(&ring.len()),
        "unexpected ring length {}",
        ring.len()
    );
    assert_eq!(ring.first(), ring.last());
    assert_eq!(ring[0], point("47 05 00 N 007 00 00 E").0);

    let center = point("47 00 00 N 007 00 00 E");
    let radius_m = geodesy::nm_to_meters(5.0);
    for coord in ring {
        let distance = geodesy::distance_m(center, Point::from(*coord));
        assert!(
            (distance - radius_m).abs() < 35.0,
            "ring point at {distance} m, expected about {radius_m} m"
        );
    }
    // Clockwise from north to south sweeps the eastern semicircle
    assert!(ring.iter().any(|c| c.x > 7.05));
    assert!(ring.iter().all(|c| c.x >= 7.0 - 1e-9));
}

#[test]
fn test_arc_without_entry_vertex_is_rejected() {
    let result = resolve(
        "ARC(47 00 00 N 007 00 00 E, 5.0, cw) - 46 55 00 N 007 00 00 E",
        None,
        &ResolveOptions::default(),
    );
    assert_eq!(
        result,
        Err(BoundaryError::MissingNeighborVertex {
            index: 0,
            kind: "arc",
            side: "before",
        })
    );
}

#[test]
fn test_arc_without_exit_vertex_is_rejected() {
    let result = resolve(
        "47 05 00 N 007 00 00 E - ARC(47 00 00 N 007 00 00 E, 5.0, cw)",
        None,
        &ResolveOptions::default(),
    );
    assert_eq!(
        result,
        Err(BoundaryError::MissingNeighborVertex {
            index: 1,
            kind: "arc",
            side: "after",
        })
    );
}

#[test]
fn test_border_between_adjacent_borders_is_rejected() {
    let provider = square_provider();
    let result = resolve(
        "46 00 00 N 006 00 00 E - BORDER(CH) - BORDER(CH) - 46 12 00 N 006 12 00 E",
        Some(&provider),
        &ResolveOptions::default(),
    );
    assert!(matches!(
        result,
        Err(BoundaryError::MissingNeighborVertex { index: 1, .. })
    ));
}

#[test]
fn test_border_without_provider_is_rejected() {
    let result = resolve(
        "46 00 00 N 006 00 00 E - BORDER(CH) - 46 12 00 N 006 12 00 E",
        None,
        &ResolveOptions::default(),
    );
    assert_eq!(result, Err(BoundaryError::MissingBorderProvider));
}

#[test]
fn test_forward_border_walk() {
    let provider = square_provider();
    let polygon = resolve(
        "46 00 00 N 006 00 00 E - BORDER(CH) - 46 12 00 N 006 12 00 E",
        Some(&provider),
        &ResolveOptions::default(),
    )
    .unwrap();
    let ring = &polygon.exterior().0;
    assert_eq!(
        ring,
        &vec![
            point("46 00 00 N 006 00 00 E").0,
            point("46 00 00 N 006 12 00 E").0,
            point("46 12 00 N 006 12 00 E").0,
            point("46 00 00 N 006 00 00 E").0,
        ]
    );
}

#[test]
fn test_inverse_border_walk() {
    let provider = square_provider();
    let polygon = resolve(
        "46 00 00 N 006 00 00 E - BORDER(CH, I) - 46 12 00 N 006 12 00 E",
        Some(&provider),
        &ResolveOptions::default(),
    )
    .unwrap();
    let ring = &polygon.exterior().0;
    assert_eq!(
        ring,
        &vec![
            point("46 00 00 N 006 00 00 E").0,
            point("46 12 00 N 006 00 00 E").0,
            point("46 12 00 N 006 12 00 E").0,
            point("46 00 00 N 006 00 00 E").0,
        ]
    );
}

#[test]
fn test_reversed_border_segment_order() {
    // Written entry and exit points sit a few meters off the border so
    // the reversed border vertices stay distinguishable in the ring.
    let provider = square_provider();
    let polygon = resolve(
        "46 00 00.40 N 006 00 00 E - BORDER(CH, R) - 46 12 00.40 N 006 12 00 E",
        Some(&provider),
        &ResolveOptions::default(),
    )
    .unwrap();
    let ring = &polygon.exterior().0;
    assert_eq!(ring[0], point("46 00 00.40 N 006 00 00 E").0);
    // Forward walk b0 -> b1 -> b2, emitted in reverse
    assert_eq!(ring[1], point("46 12 00 N 006 12 00 E").0);
    assert_eq!(ring[2], point("46 00 00 N 006 12 00 E").0);
    assert_eq!(ring[3], point("46 00 00 N 006 00 00 E").0);
    assert_eq!(ring[4], point("46 12 00.40 N 006 12 00 E").0);
}

#[test]
fn test_unknown_border_name_propagates_provider_error() {
    let provider = square_provider();
    let result = resolve(
        "46 00 00 N 006 00 00 E - BORDER(XX) - 46 12 00 N 006 12 00 E",
        Some(&provider),
        &ResolveOptions::default(),
    );
    assert_eq!(
        result,
        Err(BoundaryError::Provider(ProviderError::UnknownBorder(
            "XX".to_string()
        )))
    );
}

#[test]
fn test_two_vertices_are_degenerate() {
    let result = resolve(
        "46 20 00 N 006 30 00 E - 46 30 00 N 006 40 00 E",
        None,
        &ResolveOptions::default(),
    );
    assert_eq!(result, Err(BoundaryError::DegenerateRing { distinct: 2 }));
}

#[test]
fn test_resolution_is_idempotent() {
    let expression =
        "47 05 00 N 007 00 00 E - ARC(47 00 00 N 007 00 00 E, 5.0, cw) - 46 55 00 N 007 00 00 E";
    let first = resolve(expression, None, &ResolveOptions::default()).unwrap();
    let second = resolve(expression, None, &ResolveOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_expression_propagates() {
    let result = resolve("BORDER(CH - 46 12 00 N 006 12 00 E", None, &ResolveOptions::default());
    assert!(matches!(result, Err(BoundaryError::Expression(_))));
}

#[test]
fn test_coarser_angular_step() {
    let polygon = resolve(
        "CIRCLE(46 45 33 N / 009 05 17 E, 5.4)",
        None,
        &ResolveOptions {
            angular_step_deg: 10.0,
            ..ResolveOptions::default()
        },
    )
    .unwrap();
    assert_eq!(polygon.exterior().0.len(), 37);
}
