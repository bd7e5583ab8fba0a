//! Core game types and logic (world, camera, player, input).
//!
//! Re-exports:
//! - `geometry`: `Rect` and `Extent` in world pixels
//! - `tiles`: Tile kinds and the tile registry
//! - `grid`: Tile grid, walkability queries and map drawing
//! - `layout`: Built-in map generation
//! - `camera`: Clamped follow camera
//! - `player`: Player movement and collision
//! - `process_events`: Input polling and key mapping

pub mod geometry;
pub mod tiles;
pub mod grid;
pub mod layout;
pub mod camera;
pub mod player;
pub mod process_events;
