//! Camera tests: clamping and the apply/unapply transform

use raylib::prelude::Vector2;
use tile_walk::core::camera::Camera;
use tile_walk::core::geometry::{Extent, Rect};

const VIEW: Extent = Extent::new(800.0, 600.0);

fn targets() -> Vec<Vector2> {
    let mut out = Vec::new();
    let coords = [-500.0, 0.0, 1.0, 250.0, 399.0, 400.0, 1234.5, 2999.0, 3200.0, 9000.0];
    for &x in &coords {
        for &y in &coords {
            out.push(Vector2::new(x, y));
        }
    }
    out
}

#[test]
fn test_offset_stays_inside_world() {
    let world = Extent::new(3200.0, 2000.0);
    let mut cam = Camera::new(VIEW, world);
    for t in targets() {
        cam.follow(t);
        let off = cam.offset();
        assert!(off.x <= 0.0 && off.x >= -(world.width - VIEW.width), "x {} for {:?}", off.x, t);
        assert!(off.y <= 0.0 && off.y >= -(world.height - VIEW.height), "y {} for {:?}", off.y, t);
    }
}

#[test]
fn test_small_world_pins_to_origin() {
    let world = Extent::new(500.0, 500.0);
    let mut cam = Camera::new(VIEW, world);
    for t in targets() {
        cam.recenter(t, world, VIEW);
        assert_eq!(cam.offset(), Vector2::new(0.0, 0.0), "target {:?}", t);
    }
}

#[test]
fn test_one_axis_small_other_large() {
    let world = Extent::new(500.0, 3000.0);
    let mut cam = Camera::new(VIEW, world);
    cam.follow(Vector2::new(250.0, 1500.0));
    assert_eq!(cam.offset(), Vector2::new(0.0, -1200.0));
}

#[test]
fn test_apply_then_unapply_round_trips() {
    let mut cam = Camera::new(VIEW, Extent::new(3200.0, 3200.0));
    cam.follow(Vector2::new(1000.0, 900.0));
    let r = Rect::new(975.0, 875.0, 50.0, 50.0);
    let screen = cam.apply(r);
    assert_eq!(screen, Rect::new(375.0, 275.0, 50.0, 50.0));
    assert_eq!(cam.unapply(screen), r);
}

#[test]
fn test_followed_target_is_screen_centered_away_from_edges() {
    let mut cam = Camera::new(VIEW, Extent::new(3200.0, 3200.0));
    let r = Rect::centered_at(1600.0, 1700.0, Extent::new(50.0, 50.0));
    cam.follow(r.center());
    let c = cam.apply(r).center();
    assert_eq!((c.x, c.y), (400.0, 300.0));
}
