//! Plain rectangle math in world pixel space.

use raylib::prelude::{Rectangle, Vector2};

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a rectangle of `size` whose center sits at `(cx, cy)`.
    pub fn centered_at(cx: f32, cy: f32, size: Extent) -> Self {
        Self::new(cx - size.width / 2.0, cy - size.height / 2.0, size.width, size.height)
    }

    #[inline]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn top_left(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Same rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Same size, top-left moved to `(x, y)`.
    #[inline]
    pub fn moved_to(&self, x: f32, y: f32) -> Self {
        Self::new(x, y, self.width, self.height)
    }
}

impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Self {
        Rectangle::new(r.x, r.y, r.width, r.height)
    }
}
