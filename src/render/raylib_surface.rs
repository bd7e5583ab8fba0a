use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;

use crate::core::geometry::Rect;
use crate::render::surface::{DrawSurface, Sprite};
use crate::render::textures::TextureManager;

/// `DrawSurface` backed by a raylib draw handle for one frame.
pub struct RaylibSurface<'a, D: RaylibDraw> {
    d: &'a mut D,
    textures: &'a TextureManager,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(d: &'a mut D, textures: &'a TextureManager) -> Self {
        Self { d, textures }
    }
}

impl<D: RaylibDraw> DrawSurface for RaylibSurface<'_, D> {
    fn blit(&mut self, sprite: Sprite, dest: Rect) {
        match self.textures.get(sprite) {
            Some(tex) => {
                // stretch the whole image into dest
                let src = Rectangle::new(0.0, 0.0, tex.width() as f32, tex.height() as f32);
                self.d.draw_texture_pro(
                    tex,
                    src,
                    Rectangle::from(dest),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            None => {
                self.d.draw_rectangle_rec(Rectangle::from(dest), TextureManager::fallback_color(sprite));
            }
        }
    }
}
