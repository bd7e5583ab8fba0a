//! Tile walk: a player walks a tile map, blocked by water and walls, while
//! the camera follows and stays inside the map.
//!
//! The `core` module has no window dependency beyond raylib's math types and
//! can be driven headless through `render::surface::RecordingSurface`.

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod render;

pub use config::Config;
pub use error::{ConfigError, MapError};
pub use game::Game;
