//! Error types for map construction and configuration.
//!
//! Every failure here happens while setting things up. Once a `Grid` exists
//! nothing in the per-frame path can fail: walkability queries outside the
//! map just answer `false`.

use std::path::PathBuf;

/// Errors raised while building a `Grid` from symbol rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("unknown tile symbol {symbol:?} at row {row}, column {col}")]
    UnknownTileKind { symbol: char, row: usize, col: usize },
    #[error("map row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map has no cells")]
    Empty,
    #[error("tile size must be greater than zero")]
    ZeroTileSize,
}

/// Errors from loading or validating a `Config`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}
