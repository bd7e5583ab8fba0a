//! Per-frame driver: input, update, render.
//!
//! The window loop in `main` owns timing and presentation; `Game` owns the
//! player and camera and only borrows the map.

use log::info;
use raylib::prelude::Vector2;

use crate::config::Config;
use crate::core::camera::Camera;
use crate::core::geometry::Extent;
use crate::core::grid::Grid;
use crate::core::player::Player;
use crate::core::process_events::{apply_to_player, InputEvent};
use crate::render::surface::{DrawSurface, Sprite};

pub struct Game<'g> {
    grid: &'g Grid,
    player: Player<'g>,
    camera: Camera,
    running: bool,
}

impl<'g> Game<'g> {
    /// Wraps an already placed player. The camera starts centered on it.
    pub fn new(grid: &'g Grid, player: Player<'g>, viewport: Extent) -> Self {
        let mut camera = Camera::new(viewport, grid.world_extent());
        camera.follow(player.center());
        Self { grid, player, camera, running: true }
    }

    pub fn from_config(grid: &'g Grid, cfg: &Config) -> Self {
        let (x, y) = cfg.player_start();
        let player = Player::new(Vector2::new(x, y), cfg.player_size(), cfg.player.speed, grid);
        info!("player spawned at ({}, {})", x, y);
        Self::new(grid, player, cfg.viewport())
    }

    #[inline] pub fn player(&self) -> &Player<'g> { &self.player }
    #[inline] pub fn camera(&self) -> &Camera { &self.camera }
    #[inline] pub fn is_running(&self) -> bool { self.running }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                self.running = false;
            }
            other => apply_to_player(&mut self.player, other),
        }
    }

    /// One logical step of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.player.tick(dt);
        self.camera
            .recenter(self.player.center(), self.grid.world_extent(), self.camera.viewport());
    }

    /// Map first, player on top.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let off = self.camera.offset();
        self.grid.render(surface, off.x, off.y);
        surface.blit(Sprite::Player, self.camera.apply(self.player.rect()));
    }
}
