//! Tile kinds and the registry that maps them to assets and walkability.
//!
//! Maps are written with one character per cell:
//!
//! | symbol | kind  | walkable |
//! |--------|-------|----------|
//! | `G`    | Grass | yes      |
//! | `P`    | Path  | yes      |
//! | `W`    | Water | no       |
//! | `D`    | Wall  | no       |

use crate::config::AssetPaths;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    Path,
    Water,
    Wall,
}

impl TileKind {
    pub const ALL: [TileKind; 4] = [TileKind::Grass, TileKind::Path, TileKind::Water, TileKind::Wall];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' => Some(TileKind::Grass),
            'P' => Some(TileKind::Path),
            'W' => Some(TileKind::Water),
            'D' => Some(TileKind::Wall),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            TileKind::Grass => 'G',
            TileKind::Path => 'P',
            TileKind::Water => 'W',
            TileKind::Wall => 'D',
        }
    }

    /// Walkability is fixed per kind.
    pub fn walkable(self) -> bool {
        matches!(self, TileKind::Grass | TileKind::Path)
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// What the registry knows about one kind of tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDef {
    pub kind: TileKind,
    pub walkable: bool,
    pub asset: String,
}

/// Lookup table from `TileKind` to its definition. Immutable once built.
#[derive(Clone, Debug)]
pub struct TileRegistry {
    defs: [TileDef; 4],
}

impl TileRegistry {
    pub fn new(assets: &AssetPaths) -> Self {
        let def = |kind: TileKind, asset: &str| TileDef {
            kind,
            walkable: kind.walkable(),
            asset: asset.to_owned(),
        };
        Self {
            defs: [
                def(TileKind::Grass, &assets.grass),
                def(TileKind::Path, &assets.path),
                def(TileKind::Water, &assets.water),
                def(TileKind::Wall, &assets.wall),
            ],
        }
    }

    #[inline]
    pub fn get(&self, kind: TileKind) -> &TileDef {
        &self.defs[kind.index()]
    }

    #[inline]
    pub fn is_walkable(&self, kind: TileKind) -> bool {
        self.get(kind).walkable
    }

    pub fn asset(&self, kind: TileKind) -> &str {
        &self.get(kind).asset
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileDef> {
        self.defs.iter()
    }
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::new(&AssetPaths::default())
    }
}
