//! Tile grid: the static world map.
//!
//! Cells are stored row-major. Every cell is validated against the registry
//! when the grid is built, so lookups afterwards never fail.

use log::{debug, info};

use crate::core::geometry::{Extent, Rect};
use crate::core::tiles::{TileKind, TileRegistry};
use crate::error::MapError;
use crate::render::surface::{DrawSurface, Sprite};

#[derive(Clone, Debug)]
pub struct Grid {
    registry: TileRegistry,
    cells: Vec<TileKind>,
    width: usize,
    height: usize,
    tile_size: u32,
}

impl Grid {
    /// Builds a grid from rows of symbols.
    ///
    /// Fails on the first unknown symbol, on rows of differing length and on
    /// an empty map.
    pub fn from_rows<I, S>(registry: TileRegistry, tile_size: u32, rows: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if tile_size == 0 {
            return Err(MapError::ZeroTileSize);
        }
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (row, line) in rows.into_iter().enumerate() {
            let before = cells.len();
            for (col, symbol) in line.as_ref().chars().enumerate() {
                let kind = TileKind::from_symbol(symbol)
                    .ok_or(MapError::UnknownTileKind { symbol, row, col })?;
                cells.push(kind);
            }
            let found = cells.len() - before;
            if row == 0 {
                width = found;
            } else if found != width {
                return Err(MapError::NotRectangular { row, expected: width, found });
            }
            height += 1;
        }
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        debug!("grid built: {}x{} tiles of {}px", width, height, tile_size);
        Ok(Self { registry, cells, width, height, tile_size })
    }

    /// Parses a multi-line map. Surrounding whitespace and blank lines are ignored.
    pub fn parse(registry: TileRegistry, tile_size: u32, text: &str) -> Result<Self, MapError> {
        Self::from_rows(
            registry,
            tile_size,
            text.lines().map(str::trim).filter(|l| !l.is_empty()),
        )
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn tile_size(&self) -> u32 { self.tile_size }
    #[inline] pub fn registry(&self) -> &TileRegistry { &self.registry }

    /// Full pixel extent of the map.
    pub fn world_extent(&self) -> Extent {
        let ts = self.tile_size as f32;
        Extent::new(self.width as f32 * ts, self.height as f32 * ts)
    }

    /// Tile at `(col, row)`, or `None` outside the grid.
    pub fn kind_at(&self, col: usize, row: usize) -> Option<TileKind> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Cell containing pixel `(px, py)`, using floor division by the tile size.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        let ts = self.tile_size as f32;
        let i = (px / ts).floor();
        let j = (py / ts).floor();
        if i < 0.0 || j < 0.0 || i >= self.width as f32 || j >= self.height as f32 {
            return None;
        }
        Some((i as usize, j as usize))
    }

    /// Whether pixel `(px, py)` lies on a walkable tile. Anything outside the
    /// map is not walkable.
    pub fn is_walkable(&self, px: f32, py: f32) -> bool {
        self.cell_at(px, py)
            .and_then(|(col, row)| self.kind_at(col, row))
            .is_some_and(|kind| self.registry.is_walkable(kind))
    }

    /// Draws every cell, row by row, shifted by the camera offset.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, offset_x: f32, offset_y: f32) {
        let ts = self.tile_size as f32;
        for (row, cells) in self.cells.chunks(self.width).enumerate() {
            for (col, &kind) in cells.iter().enumerate() {
                let dest = Rect::new(col as f32 * ts + offset_x, row as f32 * ts + offset_y, ts, ts);
                surface.blit(Sprite::Tile(kind), dest);
            }
        }
    }

    /// Row-major iterator of `(col, row, kind)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &k)| (i % self.width, i / self.width, k))
    }

    pub fn log_summary(&self) {
        let blocked = self.cells.iter().filter(|k| !self.registry.is_walkable(**k)).count();
        info!(
            "map {}x{} ({}x{} px), {} blocked cells",
            self.width,
            self.height,
            self.world_extent().width,
            self.world_extent().height,
            blocked
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        Grid::parse(TileRegistry::default(), 10, text).expect("valid map")
    }

    #[test]
    fn unknown_symbol_reports_position() {
        let err = Grid::from_rows(TileRegistry::default(), 10, ["GGG", "GXG"]).unwrap_err();
        assert_eq!(err, MapError::UnknownTileKind { symbol: 'X', row: 1, col: 1 });
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::from_rows(TileRegistry::default(), 10, ["GGG", "GG"]).unwrap_err();
        assert_eq!(err, MapError::NotRectangular { row: 1, expected: 3, found: 2 });
    }

    #[test]
    fn empty_and_zero_tile_size_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(Grid::from_rows(TileRegistry::default(), 10, none).unwrap_err(), MapError::Empty);
        assert_eq!(Grid::from_rows(TileRegistry::default(), 10, [""]).unwrap_err(), MapError::Empty);
        assert_eq!(
            Grid::from_rows(TileRegistry::default(), 0, ["G"]).unwrap_err(),
            MapError::ZeroTileSize
        );
    }

    #[test]
    fn floor_division_picks_cell() {
        let g = grid("GD\nWP");
        assert_eq!(g.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(g.cell_at(9.99, 9.99), Some((0, 0)));
        assert_eq!(g.cell_at(10.0, 0.0), Some((1, 0)));
        assert_eq!(g.cell_at(19.5, 19.5), Some((1, 1)));
        assert_eq!(g.cell_at(-0.01, 5.0), None);
        assert_eq!(g.cell_at(20.0, 5.0), None);
        assert_eq!(g.cell_at(f32::NAN, 5.0), None);
    }

    #[test]
    fn walkable_follows_kind() {
        let g = grid("GD\nWP");
        assert!(g.is_walkable(5.0, 5.0));
        assert!(!g.is_walkable(15.0, 5.0));
        assert!(!g.is_walkable(5.0, 15.0));
        assert!(g.is_walkable(15.0, 15.0));
    }

    #[test]
    fn world_extent_is_tiles_times_size() {
        let g = grid("GGG\nGGG");
        assert_eq!(g.world_extent(), Extent::new(30.0, 20.0));
        assert_eq!(g.kind_at(2, 1), Some(TileKind::Grass));
        assert_eq!(g.kind_at(3, 0), None);
    }
}
