//! What the game core needs from a renderer: place a sprite in a rectangle.
use crate::core::geometry::Rect;
use crate::core::tiles::TileKind;

/// Everything that can be drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Tile(TileKind),
    Player,
}

/// A render target in screen pixels. Implementations only draw; all position
/// math happens before `blit` is called.
pub trait DrawSurface {
    fn blit(&mut self, sprite: Sprite, dest: Rect);
}

/// Surface that records draw calls in order. Used by tests and handy for
/// headless runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub calls: Vec<(Sprite, Rect)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn blit(&mut self, sprite: Sprite, dest: Rect) {
        self.calls.push((sprite, dest));
    }
}
