use log::{info, warn};
use raylib::prelude::*;
use std::collections::HashMap;

use crate::core::tiles::{TileKind, TileRegistry};
use crate::render::surface::Sprite;

/// GPU textures per sprite. Sprites whose image failed to load are drawn as
/// flat colored squares instead.
pub struct TextureManager {
    textures: HashMap<Sprite, Texture2D>,
}

impl TextureManager {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        registry: &TileRegistry,
        player_asset: &str,
    ) -> Self {
        let mut tm = Self { textures: HashMap::new() };

        let candidates = registry
            .iter()
            .map(|def| (Sprite::Tile(def.kind), def.asset.as_str()))
            .chain(std::iter::once((Sprite::Player, player_asset)))
            .collect::<Vec<_>>();
        let wanted = candidates.len();

        for (sprite, path) in candidates {
            let loaded = Image::load_image(path)
                .map_err(|e| e.to_string())
                .and_then(|img| {
                    rl.load_texture_from_image(thread, &img)
                        .map_err(|e| e.to_string())
                });
            match loaded {
                Ok(tex) => {
                    tm.textures.insert(sprite, tex);
                }
                Err(e) => warn!("{:?}: could not load {} ({}), using flat color", sprite, path, e),
            }
        }
        info!("loaded {} of {} textures", tm.textures.len(), wanted);
        tm
    }

    pub fn get(&self, sprite: Sprite) -> Option<&Texture2D> {
        self.textures.get(&sprite)
    }

    /// Color used when a sprite has no texture.
    pub fn fallback_color(sprite: Sprite) -> Color {
        match sprite {
            Sprite::Tile(TileKind::Grass) => Color::new(56, 142, 60, 255),
            Sprite::Tile(TileKind::Path) => Color::new(194, 160, 110, 255),
            Sprite::Tile(TileKind::Water) => Color::new(40, 90, 200, 255),
            Sprite::Tile(TileKind::Wall) => Color::new(90, 90, 96, 255),
            Sprite::Player => Color::new(255, 220, 60, 255),
        }
    }
}
