//! Load-time errors for maps and levels.
//!
//! Per-frame outcomes (culled sprites, rejected moves, expired projectiles)
//! are ordinary return values and never show up here.

use thiserror::Error;

/// Map asset errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, ch: char },
    #[error("map expects {expected} cells, got {found}")]
    CellCountMismatch { expected: usize, found: usize },
}

/// Level errors: a valid map with an invalid spawn layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("player start ({x}, {y}) is outside the map or inside a wall")]
    StartBlocked { x: f32, y: f32 },
    #[error("target {index} at ({x}, {y}) is outside the map or inside a wall")]
    TargetBlocked { index: usize, x: f32, y: f32 },
}
