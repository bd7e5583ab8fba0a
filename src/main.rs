// main.rs
use anyhow::{Context, Result};
use log::{info, warn};
use raylib::prelude::*;

use tile_walk::Config;
use tile_walk::Game;
use tile_walk::core::grid::Grid;
use tile_walk::core::layout::hero_map;
use tile_walk::core::process_events::poll_events;
use tile_walk::core::tiles::TileRegistry;
use tile_walk::render::raylib_surface::RaylibSurface;
use tile_walk::render::textures::TextureManager;

fn main() -> Result<()> {
    // RUST_LOG overrides the default filter.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_owned());
    let cfg = Config::load_or_default(&config_path)
        .with_context(|| format!("loading config from {config_path}"))?;

    let registry = TileRegistry::new(&cfg.assets);
    let grid = Grid::from_rows(registry, cfg.tile_size, hero_map(cfg.map.width, cfg.map.height))
        .context("building map")?;
    grid.log_summary();

    let (sx, sy) = cfg.player_start();
    if !grid.is_walkable(sx, sy) {
        warn!("player starts on a blocked tile at ({sx}, {sy}) and will not be able to move");
    }

    let (mut window, raylib_thread) = raylib::init()
        .size(cfg.window.width as i32, cfg.window.height as i32)
        .title(&cfg.window.title)
        .build();
    window.set_target_fps(cfg.fps);

    let textures = TextureManager::new(&mut window, &raylib_thread, grid.registry(), &cfg.assets.player);
    let mut game = Game::from_config(&grid, &cfg);

    info!("running at {} fps target", cfg.fps);
    while game.is_running() {
        for event in poll_events(&window) {
            game.handle(event);
        }
        if !game.is_running() {
            break;
        }

        game.update(window.get_frame_time());

        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        let mut surface = RaylibSurface::new(&mut d, &textures);
        game.render(&mut surface);
    }

    info!("bye");
    Ok(())
}
