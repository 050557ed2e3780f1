#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- defaults ---

#[test]
fn default_zoom_is_hundred_percent() {
    let cam = Camera::default();
    assert_eq!(cam.zoom, 100.0);
    assert_eq!(cam.scale(), 1.0);
}

#[test]
fn default_pan_is_zero() {
    let cam = Camera::default();
    assert_eq!(cam.offset_x, 0.0);
    assert_eq!(cam.offset_y, 0.0);
}

// --- button zoom clamping ---

#[test]
fn zoom_in_steps_by_ten() {
    let mut cam = Camera::default();
    cam.zoom_in();
    assert_eq!(cam.zoom, 110.0);
}

#[test]
fn zoom_out_steps_by_ten() {
    let mut cam = Camera::default();
    cam.zoom_out();
    assert_eq!(cam.zoom, 90.0);
}

#[test]
fn repeated_zoom_in_never_exceeds_max() {
    let mut cam = Camera::default();
    for _ in 0..50 {
        cam.zoom_in();
    }
    assert_eq!(cam.zoom, MAX_ZOOM);
}

#[test]
fn repeated_zoom_out_never_goes_below_min() {
    let mut cam = Camera::default();
    for _ in 0..50 {
        cam.zoom_out();
    }
    assert_eq!(cam.zoom, MIN_ZOOM);
}

#[test]
fn button_zoom_preserves_pan() {
    let mut cam = Camera { offset_x: 12.5, offset_y: -3.0, zoom: 100.0 };
    cam.zoom_in();
    cam.zoom_out();
    assert_eq!(cam.offset_x, 12.5);
    assert_eq!(cam.offset_y, -3.0);
}

#[test]
fn set_zoom_clamps_both_ends() {
    let mut cam = Camera::default();
    cam.set_zoom(500.0);
    assert_eq!(cam.zoom, MAX_ZOOM);
    cam.set_zoom(1.0);
    assert_eq!(cam.zoom, MIN_ZOOM);
}

// --- coordinate transforms ---

#[test]
fn content_screen_round_trip() {
    let cam = Camera { offset_x: 40.0, offset_y: -10.0, zoom: 150.0 };
    let content = Point::new(123.4, -56.7);
    let back = cam.screen_to_content(cam.content_to_screen(content));
    assert!(point_approx_eq(content, back));
}

#[test]
fn identity_transform_at_default() {
    let cam = Camera::default();
    let p = Point::new(17.0, 23.0);
    assert!(point_approx_eq(cam.content_to_screen(p), p));
}

// --- anchored zoom ---

#[test]
fn wheel_zoom_steps_by_five() {
    let mut cam = Camera::default();
    cam.wheel_zoom(true, Point::new(0.0, 0.0));
    assert_eq!(cam.zoom, 105.0);
    cam.wheel_zoom(false, Point::new(0.0, 0.0));
    assert_eq!(cam.zoom, 100.0);
}

#[test]
fn wheel_zoom_keeps_cursor_point_fixed() {
    let mut cam = Camera { offset_x: 30.0, offset_y: 20.0, zoom: 120.0 };
    let cursor = Point::new(250.0, 140.0);
    let anchor = cam.screen_to_content(cursor);
    cam.wheel_zoom(true, cursor);
    assert!(point_approx_eq(cam.content_to_screen(anchor), cursor));
}

#[test]
fn wheel_zoom_out_keeps_cursor_point_fixed() {
    let mut cam = Camera { offset_x: -15.0, offset_y: 8.0, zoom: 80.0 };
    let cursor = Point::new(60.0, 400.0);
    let anchor = cam.screen_to_content(cursor);
    cam.wheel_zoom(false, cursor);
    assert!(point_approx_eq(cam.content_to_screen(anchor), cursor));
}

#[test]
fn wheel_zoom_at_max_is_a_no_op() {
    let mut cam = Camera { offset_x: 5.0, offset_y: 5.0, zoom: MAX_ZOOM };
    let before = cam;
    cam.wheel_zoom(true, Point::new(100.0, 100.0));
    assert_eq!(cam, before);
}

#[test]
fn wheel_zoom_at_min_is_a_no_op() {
    let mut cam = Camera { offset_x: 5.0, offset_y: 5.0, zoom: MIN_ZOOM };
    let before = cam;
    cam.wheel_zoom(false, Point::new(100.0, 100.0));
    assert_eq!(cam, before);
}

#[test]
fn repeated_wheel_zoom_in_clamps_at_max() {
    let mut cam = Camera::default();
    for _ in 0..100 {
        cam.wheel_zoom(true, Point::new(320.0, 240.0));
    }
    assert_eq!(cam.zoom, MAX_ZOOM);
}

// --- drag pan ---

#[test]
fn dragged_moves_content_with_pointer() {
    let cam = Camera { offset_x: 0.0, offset_y: 0.0, zoom: 200.0 };
    let dragged = cam.dragged(Point::new(10.0, 10.0), Point::new(50.0, 30.0));
    // 40px screen movement at 2x scale is 20px of pre-scale translate.
    assert!(approx_eq(dragged.offset_x, 20.0));
    assert!(approx_eq(dragged.offset_y, 10.0));
    assert_eq!(dragged.zoom, 200.0);
}

#[test]
fn dragged_screen_delta_matches_pointer_delta() {
    let cam = Camera { offset_x: 7.0, offset_y: -2.0, zoom: 130.0 };
    let start = Point::new(100.0, 100.0);
    let current = Point::new(163.0, 58.0);
    let content = Point::new(11.0, 13.0);
    let before = cam.content_to_screen(content);
    let after = cam.dragged(start, current).content_to_screen(content);
    assert!(approx_eq(after.x - before.x, current.x - start.x));
    assert!(approx_eq(after.y - before.y, current.y - start.y));
}

// --- css transform ---

#[test]
fn css_transform_formats_scale_then_translate() {
    let cam = Camera { offset_x: 10.0, offset_y: -4.5, zoom: 50.0 };
    assert_eq!(cam.css_transform(), "scale(0.5) translate(10px, -4.5px)");
}

#[test]
fn css_transform_default() {
    assert_eq!(Camera::default().css_transform(), "scale(1) translate(0px, 0px)");
}
