#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn world_approx_eq(a: ProjectedCoordinate, b: ProjectedCoordinate) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn viewport(cx: f64, cy: f64, resolution: f64) -> MapViewport {
    MapViewport::new(ProjectedCoordinate::new(cx, cy), resolution, 800.0, 600.0).unwrap()
}

// --- construction ---

#[test]
fn new_rejects_bad_resolution() {
    let c = ProjectedCoordinate::new(0.0, 0.0);
    assert_eq!(MapViewport::new(c, 0.0, 10.0, 10.0), Err(ViewportError::InvalidResolution(0.0)));
    assert_eq!(MapViewport::new(c, -1.0, 10.0, 10.0), Err(ViewportError::InvalidResolution(-1.0)));
    assert!(MapViewport::new(c, f64::NAN, 10.0, 10.0).is_err());
}

#[test]
fn new_rejects_bad_size() {
    let c = ProjectedCoordinate::new(0.0, 0.0);
    assert_eq!(
        MapViewport::new(c, 1.0, 0.0, 10.0),
        Err(ViewportError::InvalidSize { width: 0.0, height: 10.0 })
    );
    assert!(MapViewport::new(c, 1.0, 10.0, f64::INFINITY).is_err());
}

#[test]
fn accessors_return_constructor_values() {
    let vp = viewport(5.0, 6.0, 2.0);
    assert_eq!(vp.center(), ProjectedCoordinate::new(5.0, 6.0));
    assert_eq!(vp.resolution(), 2.0);
    assert_eq!(vp.width(), 800.0);
    assert_eq!(vp.height(), 600.0);
}

// --- screen_to_world ---

#[test]
fn screen_center_is_viewport_center() {
    let vp = viewport(1000.0, -2000.0, 50.0);
    assert!(world_approx_eq(vp.screen_to_world(ScreenPoint::new(400.0, 300.0)), vp.center()));
}

#[test]
fn screen_right_is_world_east() {
    let vp = viewport(0.0, 0.0, 100.0);
    let w = vp.screen_to_world(ScreenPoint::new(410.0, 300.0));
    assert!(world_approx_eq(w, ProjectedCoordinate::new(1000.0, 0.0)));
}

#[test]
fn screen_down_is_world_south() {
    let vp = viewport(0.0, 0.0, 100.0);
    let w = vp.screen_to_world(ScreenPoint::new(400.0, 310.0));
    assert!(world_approx_eq(w, ProjectedCoordinate::new(0.0, -1000.0)));
}

#[test]
fn screen_origin_is_top_left_corner() {
    let vp = viewport(0.0, 0.0, 1.0);
    let w = vp.screen_to_world(ScreenPoint::new(0.0, 0.0));
    assert!(world_approx_eq(w, ProjectedCoordinate::new(-400.0, 300.0)));
}

// --- world_to_screen ---

#[test]
fn world_to_screen_inverts_screen_to_world() {
    let vp = viewport(123.0, 456.0, 7.5);
    let s = ScreenPoint::new(37.0, 581.0);
    let back = vp.world_to_screen(vp.screen_to_world(s));
    assert!(approx_eq(back.x, s.x));
    assert!(approx_eq(back.y, s.y));
}

// --- mutation ---

#[test]
fn center_on_moves_camera() {
    let mut vp = viewport(0.0, 0.0, 100.0);
    vp.center_on(ProjectedCoordinate::new(10.0, 20.0), 25.0).unwrap();
    assert_eq!(vp.center(), ProjectedCoordinate::new(10.0, 20.0));
    assert_eq!(vp.resolution(), 25.0);
}

#[test]
fn center_on_rejects_bad_resolution_and_keeps_state() {
    let mut vp = viewport(0.0, 0.0, 100.0);
    assert!(vp.center_on(ProjectedCoordinate::new(10.0, 20.0), 0.0).is_err());
    assert_eq!(vp.resolution(), 100.0);
    assert_eq!(vp.center(), ProjectedCoordinate::new(0.0, 0.0));
}

#[test]
fn set_size_keeps_center_under_screen_middle() {
    let mut vp = viewport(50.0, 50.0, 2.0);
    vp.set_size(1024.0, 768.0).unwrap();
    assert!(world_approx_eq(vp.screen_to_world(ScreenPoint::new(512.0, 384.0)), ProjectedCoordinate::new(50.0, 50.0)));
}

#[test]
fn set_size_rejects_negative() {
    let mut vp = viewport(0.0, 0.0, 1.0);
    assert!(vp.set_size(-1.0, 10.0).is_err());
    assert_eq!(vp.width(), 800.0);
}
