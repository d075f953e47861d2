#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- ScreenPoint ---

#[test]
fn screen_point_distance_is_euclidean() {
    let a = ScreenPoint::new(100.0, 100.0);
    let b = ScreenPoint::new(103.0, 104.0);
    assert!(approx_eq(a.distance(b), 5.0));
    assert!(approx_eq(b.distance(a), 5.0));
}

#[test]
fn screen_point_distance_to_self_is_zero() {
    let a = ScreenPoint::new(12.5, -3.0);
    assert_eq!(a.distance(a), 0.0);
}

// --- GeographicCoordinate ---

#[test]
fn geographic_valid_range() {
    assert!(GeographicCoordinate::new(0.0, 0.0).is_valid());
    assert!(GeographicCoordinate::new(180.0, 85.0).is_valid());
    assert!(GeographicCoordinate::new(-180.0, -85.0).is_valid());
}

#[test]
fn geographic_out_of_range_is_invalid() {
    assert!(!GeographicCoordinate::new(180.5, 0.0).is_valid());
    assert!(!GeographicCoordinate::new(0.0, 89.0).is_valid());
    assert!(!GeographicCoordinate::new(f64::NAN, 0.0).is_valid());
    assert!(!GeographicCoordinate::new(0.0, f64::INFINITY).is_valid());
}

// --- ProjectedCoordinate ---

#[test]
fn projected_distance_is_euclidean() {
    let a = ProjectedCoordinate::new(0.0, 0.0);
    let b = ProjectedCoordinate::new(600.0, 800.0);
    assert!(approx_eq(a.distance(b), 1000.0));
}

#[test]
fn projected_is_finite() {
    assert!(ProjectedCoordinate::new(1.0, 2.0).is_finite());
    assert!(!ProjectedCoordinate::new(f64::NAN, 2.0).is_finite());
}

#[test]
fn projected_into_geo_coord() {
    let c: geo::Coord<f64> = ProjectedCoordinate::new(3.0, 4.0).into();
    assert_eq!(c.x, 3.0);
    assert_eq!(c.y, 4.0);
}

#[test]
fn geographic_into_geo_coord_is_lon_lat() {
    let c: geo::Coord<f64> = GeographicCoordinate::new(133.0, -25.0).into();
    assert_eq!(c.x, 133.0);
    assert_eq!(c.y, -25.0);
}

// --- Vertex ---

#[test]
fn vertex_from_geographic_projects_forward() {
    let geo = GeographicCoordinate::new(10.0, 20.0);
    let v = Vertex::from_geographic(geo);
    assert_eq!(v.geographic(), geo);
    assert_eq!(v.projected(), projection::to_projected(geo));
}

#[test]
fn vertex_from_projected_halves_agree() {
    let p = ProjectedCoordinate::new(1_000_000.0, -2_000_000.0);
    let v = Vertex::from_projected(p);
    assert!((v.projected().x - p.x).abs() < 1e-6);
    assert!((v.projected().y - p.y).abs() < 1e-6);
    assert_eq!(v.projected(), projection::to_projected(v.geographic()));
}
