//! Follow camera over a tile world.
//!
//! The camera keeps a top-left offset in world pixels, always `<= 0` on each
//! axis, that is added to world positions to get screen positions.

use raylib::prelude::Vector2;

use crate::core::geometry::{Extent, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// View rectangle: `x`/`y` hold the offset, `width`/`height` the viewport.
    view: Rect,
    world: Extent,
}

/// Clamps one axis of the offset into `[-(world - viewport), 0]`.
///
/// When the world is smaller than the viewport the range collapses to `0`,
/// so the map is pinned to the top-left corner instead of being centered.
#[inline]
fn clamp_axis(offset: f32, world: f32, viewport: f32) -> f32 {
    let lower = (viewport - world).min(0.0);
    offset.clamp(lower, 0.0)
}

impl Camera {
    pub fn new(viewport: Extent, world: Extent) -> Self {
        Self {
            view: Rect::new(0.0, 0.0, viewport.width, viewport.height),
            world,
        }
    }

    #[inline] pub fn offset(&self) -> Vector2 { self.view.top_left() }
    #[inline] pub fn view(&self) -> Rect { self.view }
    #[inline] pub fn viewport(&self) -> Extent { self.view.size() }
    #[inline] pub fn world(&self) -> Extent { self.world }

    /// Centers the view on `target`, clamped so the view never leaves the world.
    ///
    /// World and viewport sizes are taken per call and remembered for `follow`.
    pub fn recenter(&mut self, target: Vector2, world: Extent, viewport: Extent) {
        let x = viewport.width / 2.0 - target.x;
        let y = viewport.height / 2.0 - target.y;
        self.world = world;
        self.view = Rect::new(
            clamp_axis(x, world.width, viewport.width),
            clamp_axis(y, world.height, viewport.height),
            viewport.width,
            viewport.height,
        );
    }

    /// `recenter` using the sizes already stored on the camera.
    pub fn follow(&mut self, target: Vector2) {
        self.recenter(target, self.world, self.viewport());
    }

    /// World rectangle to screen rectangle.
    #[inline]
    pub fn apply(&self, rect: Rect) -> Rect {
        rect.translated(self.view.x, self.view.y)
    }

    /// Screen rectangle back to world rectangle.
    #[inline]
    pub fn unapply(&self, rect: Rect) -> Rect {
        rect.translated(-self.view.x, -self.view.y)
    }
}
