//! Player movement and tile collision.
use log::{debug, trace};
use raylib::prelude::Vector2;

use crate::core::geometry::{Extent, Rect};
use crate::core::grid::Grid;

/// Input state of one velocity axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Negative,
    Stop,
    Positive,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Negative => -1.0,
            Direction::Stop => 0.0,
            Direction::Positive => 1.0,
        }
    }
}

/// The walking player. Borrows the grid only to ask whether a spot is walkable.
#[derive(Clone, Debug)]
pub struct Player<'g> {
    rect: Rect,
    vel: Vector2, // px/s
    speed: f32,
    grid: &'g Grid,
}

impl<'g> Player<'g> {
    pub fn new(center: Vector2, size: Extent, speed: f32, grid: &'g Grid) -> Self {
        Self {
            rect: Rect::centered_at(center.x, center.y, size),
            vel: Vector2::new(0.0, 0.0),
            speed,
            grid,
        }
    }

    #[inline] pub fn rect(&self) -> Rect { self.rect }
    #[inline] pub fn center(&self) -> Vector2 { self.rect.center() }
    #[inline] pub fn velocity(&self) -> Vector2 { self.vel }
    #[inline] pub fn speed(&self) -> f32 { self.speed }

    pub fn set_horizontal(&mut self, dir: Direction) {
        self.vel.x = dir.sign() * self.speed;
    }

    pub fn set_vertical(&mut self, dir: Direction) {
        self.vel.y = dir.sign() * self.speed;
    }

    pub fn move_up(&mut self) { self.set_vertical(Direction::Negative); }
    pub fn move_down(&mut self) { self.set_vertical(Direction::Positive); }
    pub fn move_left(&mut self) { self.set_horizontal(Direction::Negative); }
    pub fn move_right(&mut self) { self.set_horizontal(Direction::Positive); }
    pub fn stop_x(&mut self) { self.set_horizontal(Direction::Stop); }
    pub fn stop_y(&mut self) { self.set_vertical(Direction::Stop); }

    /// Advances by `velocity * dt` if the new center lands on a walkable tile.
    ///
    /// A blocked move cancels both axes and leaves the position alone, so a
    /// diagonal into a wall stops dead rather than sliding along it.
    /// Returns whether the player moved.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.vel.x == 0.0 && self.vel.y == 0.0 {
            return false;
        }
        let candidate = self
            .rect
            .moved_to(self.rect.x + self.vel.x * dt, self.rect.y + self.vel.y * dt);
        let c = candidate.center();
        if self.grid.is_walkable(c.x, c.y) {
            trace!("player -> ({:.1}, {:.1})", candidate.x, candidate.y);
            self.rect = candidate;
            true
        } else {
            debug!("move blocked at ({:.1}, {:.1}), stopping", c.x, c.y);
            self.stop_x();
            self.stop_y();
            false
        }
    }
}
