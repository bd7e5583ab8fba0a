//! Drawing: the abstract surface the game draws on and its raylib backend.
//!
//! Re-exports:
//! - `surface`: `DrawSurface` trait and `Sprite` ids
//! - `textures`: Texture manager with procedural fallbacks
//! - `raylib_surface`: `DrawSurface` over a raylib draw handle

pub mod surface;
pub mod textures;
pub mod raylib_surface;
