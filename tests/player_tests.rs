//! Player tests: movement integration and collision

use raylib::prelude::Vector2;
use tile_walk::core::geometry::Extent;
use tile_walk::core::grid::Grid;
use tile_walk::core::player::{Direction, Player};
use tile_walk::core::tiles::TileRegistry;

const TS: u32 = 64;
const SIZE: Extent = Extent::new(32.0, 32.0);

fn walled_center() -> Grid {
    Grid::parse(TileRegistry::default(), TS, "GGG\nGDG\nGGG").unwrap()
}

#[test]
fn test_free_move_advances_by_velocity_times_dt() {
    let grid = Grid::parse(TileRegistry::default(), TS, "GGGG\nGGGG").unwrap();
    let mut p = Player::new(Vector2::new(48.0, 32.0), SIZE, 100.0, &grid);
    p.set_horizontal(Direction::Positive);
    let x0 = p.rect().x;
    let y0 = p.rect().y;

    assert!(p.tick(0.5));
    assert_eq!(p.rect().x, x0 + 100.0 * 0.5);
    assert_eq!(p.rect().y, y0);
    assert_eq!(p.velocity(), Vector2::new(100.0, 0.0));

    assert!(p.tick(0.25));
    assert_eq!(p.rect().x, x0 + 75.0);
}

#[test]
fn test_walk_into_center_wall_stops() {
    let grid = walled_center();
    // one cell left of the wall, centered in the cell
    let mut p = Player::new(Vector2::new(32.0, 96.0), SIZE, 100.0, &grid);
    p.move_right();
    let before = p.rect();

    // 100 px/s * 0.64 s = 64 px: the center would land at (96, 96), inside the wall
    assert!(!p.tick(0.64));
    assert_eq!(p.rect(), before);
    assert_eq!(p.velocity(), Vector2::new(0.0, 0.0));

    // stopped: further ticks do nothing
    assert!(!p.tick(1.0));
    assert_eq!(p.rect(), before);
}

#[test]
fn test_diagonal_into_wall_cancels_both_axes() {
    let grid = walled_center();
    let mut p = Player::new(Vector2::new(32.0, 32.0), SIZE, 100.0, &grid);
    p.move_right();
    p.move_down();
    let before = p.rect();

    assert!(!p.tick(0.64));
    assert_eq!(p.rect(), before);
    // no sliding along the open axis
    assert_eq!(p.velocity(), Vector2::new(0.0, 0.0));
}

#[test]
fn test_short_step_that_stays_walkable_commits() {
    let grid = walled_center();
    let mut p = Player::new(Vector2::new(32.0, 96.0), SIZE, 100.0, &grid);
    p.move_right();
    // center moves to 63 px, still in the left column
    assert!(p.tick(0.31));
    assert!((p.center().x - 63.0).abs() < 1e-4);
    assert_eq!(p.velocity().x, 100.0);
}

#[test]
fn test_collision_uses_center_not_edges() {
    let grid = walled_center();
    // the right edge already overlaps the wall column, the center does not
    let mut p = Player::new(Vector2::new(60.0, 96.0), Extent::new(40.0, 40.0), 10.0, &grid);
    p.move_right();
    assert!(p.tick(0.1));
    assert_eq!(p.center().x, 61.0);
}

#[test]
fn test_leaving_the_map_is_blocked() {
    let grid = walled_center();
    let mut p = Player::new(Vector2::new(32.0, 32.0), SIZE, 100.0, &grid);
    p.move_left();
    let before = p.rect();
    assert!(!p.tick(0.5));
    assert_eq!(p.rect(), before);
    assert_eq!(p.velocity(), Vector2::new(0.0, 0.0));
}
