use super::*;
use crate::coord::{ProjectedCoordinate, Vertex};

fn ring_of(points: &[(f64, f64)]) -> InProgressRing {
    let mut ring = InProgressRing::new();
    for &(x, y) in points {
        ring.append(Vertex::from_projected(ProjectedCoordinate::new(x, y)));
    }
    ring
}

fn defaults() -> ClosureParams {
    ClosureParams::default()
}

// =============================================================
// Tolerance
// =============================================================

#[test]
fn default_params() {
    let p = defaults();
    assert!((p.symbol_scale - 0.4).abs() < f64::EPSILON);
    assert!((p.symbol_pixel_radius - 32.0).abs() < f64::EPSILON);
    assert_eq!(p.min_vertices, 4);
}

#[test]
fn tolerance_at_resolution_100_is_1280() {
    assert!((tolerance_radius(100.0, &defaults()) - 1280.0).abs() < 1e-9);
}

#[test]
fn tolerance_scales_linearly_with_resolution() {
    let p = defaults();
    for r in [0.5, 1.0, 37.0, 100.0, 4891.97] {
        let single = tolerance_radius(r, &p);
        let double = tolerance_radius(r * 2.0, &p);
        assert!((double - 2.0 * single).abs() < 1e-9 * double.max(1.0));
    }
}

#[test]
fn pixel_tolerance_is_resolution_independent() {
    assert!((defaults().pixel_tolerance() - 12.8).abs() < 1e-9);
}

// =============================================================
// Vertex-count floor
// =============================================================

#[test]
fn empty_ring_is_not_closed() {
    assert!(!is_closed(&InProgressRing::new(), 100.0, &defaults()));
}

#[test]
fn fewer_than_four_never_closes() {
    // Even when every vertex is on top of the first.
    for n in 1..4 {
        let pts = vec![(0.0, 0.0); n];
        assert!(!is_closed(&ring_of(&pts), 100.0, &defaults()), "count {n}");
    }
    assert!(!is_closed(&ring_of(&[(0.0, 0.0), (1.0, 0.0), (0.5, 0.0)]), 1e6, &defaults()));
}

#[test]
fn custom_min_vertices_is_honored() {
    let p = ClosureParams { min_vertices: 5, ..defaults() };
    let ring = ring_of(&[(0.0, 0.0), (5000.0, 0.0), (5000.0, 5000.0), (10.0, 0.0)]);
    assert!(!is_closed(&ring, 100.0, &p));
    assert!(is_closed(&ring, 100.0, &defaults()));
}

// =============================================================
// Distance test
// =============================================================

#[test]
fn fourth_vertex_within_tolerance_closes() {
    let ring = ring_of(&[(0.0, 0.0), (5000.0, 0.0), (5000.0, 5000.0), (1000.0, 0.0)]);
    assert!(is_closed(&ring, 100.0, &defaults()));
}

#[test]
fn fourth_vertex_outside_tolerance_does_not_close() {
    let ring = ring_of(&[(0.0, 0.0), (5000.0, 0.0), (5000.0, 5000.0), (0.0, 1500.0)]);
    assert!(!is_closed(&ring, 100.0, &defaults()));
}

#[test]
fn fifth_vertex_within_tolerance_closes() {
    let mut ring = ring_of(&[(0.0, 0.0), (5000.0, 0.0), (5000.0, 5000.0), (0.0, 1500.0)]);
    ring.append(Vertex::from_projected(ProjectedCoordinate::new(0.0, 1200.0)));
    assert!(is_closed(&ring, 100.0, &defaults()));
}

#[test]
fn zooming_in_shrinks_the_target() {
    let ring = ring_of(&[(0.0, 0.0), (5000.0, 0.0), (5000.0, 5000.0), (1000.0, 0.0)]);
    assert!(is_closed(&ring, 100.0, &defaults()));
    assert!(!is_closed(&ring, 50.0, &defaults()));
}

#[test]
fn exact_equality_is_not_required_but_accepted() {
    let exact = ring_of(&[(0.0, 0.0), (5000.0, 0.0), (5000.0, 5000.0), (0.0, 0.0)]);
    assert!(is_closed(&exact, 100.0, &defaults()));
    let near = ring_of(&[(0.0, 0.0), (5000.0, 0.0), (5000.0, 5000.0), (0.1, -0.1)]);
    assert!(is_closed(&near, 100.0, &defaults()));
}

#[test]
fn only_first_and_last_are_compared() {
    // An intermediate vertex near the start does not close the ring.
    let ring = ring_of(&[(0.0, 0.0), (10.0, 0.0), (5000.0, 5000.0), (9000.0, 9000.0)]);
    assert!(!is_closed(&ring, 100.0, &defaults()));
}

#[test]
fn distance_equal_to_tolerance_closes() {
    // Unit pixel tolerance makes the radius equal to the resolution, so the
    // measured first-last distance can be used as an exact tolerance.
    let ring = ring_of(&[(0.0, 0.0), (5000.0, 0.0), (5000.0, 5000.0), (1280.0, 0.0)]);
    let (Some(first), Some(last)) = (ring.first(), ring.last()) else {
        panic!("ring should have vertices");
    };
    let d = first.projected().distance(last.projected());
    let unit = ClosureParams { symbol_scale: 1.0, symbol_pixel_radius: 1.0, ..defaults() };
    assert!((tolerance_radius(d, &unit) - d).abs() < f64::EPSILON);
    assert!(is_closed(&ring, d, &unit));
    assert!(!is_closed(&ring, d * (1.0 - 1e-12), &unit));
}
