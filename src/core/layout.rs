//! Built-in map layout.
//!
//! The map is generated in code: grass everywhere, a wall around the edge,
//! a small lake in the upper-left quadrant and two paths crossing at the
//! middle. Paths are laid last, so they cut through the perimeter wall where
//! they reach the edge.

use crate::core::tiles::TileKind;

/// Top-left corner and side of the water patch, in tiles.
const WATER_START: usize = 10;
const WATER_END: usize = 15;

/// Symbol rows for the default map of `width x height` tiles.
pub fn hero_map(width: usize, height: usize) -> Vec<String> {
    let mut grid = vec![vec![TileKind::Grass.symbol(); width]; height];
    if width == 0 || height == 0 {
        return Vec::new();
    }

    for x in 0..width {
        grid[0][x] = TileKind::Wall.symbol();
        grid[height - 1][x] = TileKind::Wall.symbol();
    }
    for row in grid.iter_mut() {
        row[0] = TileKind::Wall.symbol();
        row[width - 1] = TileKind::Wall.symbol();
    }

    for row in grid.iter_mut().take(WATER_END.min(height)).skip(WATER_START) {
        for cell in row.iter_mut().take(WATER_END.min(width)).skip(WATER_START) {
            *cell = TileKind::Water.symbol();
        }
    }

    let mid_col = (width / 2).saturating_sub(1);
    let mid_row = (height / 2).saturating_sub(1);
    for row in grid.iter_mut() {
        row[mid_col] = TileKind::Path.symbol();
    }
    for cell in grid[mid_row].iter_mut() {
        *cell = TileKind::Path.symbol();
    }

    grid.into_iter().map(|r| r.into_iter().collect()).collect()
}
