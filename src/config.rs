//! Startup configuration.
//!
//! Every value has a default, so the game runs without any file. A TOML file
//! may override any subset:
//!
//! ```toml
//! tile_size = 32
//! fps = 30
//!
//! [window]
//! width = 1024
//!
//! [player]
//! speed = 150.0
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::geometry::Extent;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
    pub tile_size: u32,
    pub fps: u32,
    pub player: PlayerConfig,
    pub map: MapConfig,
    pub assets: AssetPaths,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Pixels per second.
    pub speed: f32,
    pub width: u32,
    pub height: u32,
    /// Start position of the player's center. Defaults to the viewport center.
    pub start: Option<(f32, f32)>,
}

/// Map size in tiles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetPaths {
    pub grass: String,
    pub path: String,
    pub water: String,
    pub wall: String,
    pub player: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tile_size: 64,
            fps: 60,
            player: PlayerConfig::default(),
            map: MapConfig::default(),
            assets: AssetPaths::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 800, height: 600, title: "Hero's Adventure".into() }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { speed: 100.0, width: 50, height: 50, start: None }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { width: 50, height: 50 }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            grass: "img/grass.png".into(),
            path: "img/path.png".into(),
            water: "img/water.png".into(),
            wall: "img/wall.png".into(),
            player: "img/player.png".into(),
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like `load`, but a missing file just means defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_owned()));
        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        if self.tile_size == 0 {
            return invalid("tile_size must be non-zero");
        }
        if self.fps == 0 {
            return invalid("fps must be non-zero");
        }
        if !(self.player.speed.is_finite() && self.player.speed > 0.0) {
            return invalid("player.speed must be a positive number");
        }
        if self.player.width == 0 || self.player.height == 0 {
            return invalid("player size must be non-zero");
        }
        if self.map.width == 0 || self.map.height == 0 {
            return invalid("map size must be non-zero");
        }
        Ok(())
    }

    pub fn viewport(&self) -> Extent {
        Extent::new(self.window.width as f32, self.window.height as f32)
    }

    pub fn player_size(&self) -> Extent {
        Extent::new(self.player.width as f32, self.player.height as f32)
    }

    /// Player start center: configured, or the middle of the viewport.
    pub fn player_start(&self) -> (f32, f32) {
        self.player.start.unwrap_or((
            (self.window.width / 2) as f32,
            (self.window.height / 2) as f32,
        ))
    }
}
