//! Frame rasterizer: turns one column's ray hit into sky, wall and floor spans.

use crate::grid::ScreenGrid;
use crate::raycast::RayHit;
use crate::types::{BLANK_GLYPH, FLOOR_SHADES};

/// Vertical extent of a wall slice in screen rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpan {
    /// Rows strictly above this are sky.
    pub ceiling: f32,
    /// Rows strictly below this are floor.
    pub floor: f32,
}

impl ColumnSpan {
    /// Perspective extent for a wall at `dist`: closer walls push the ceiling
    /// and floor lines further from the horizon.
    pub fn for_distance(dist: f32, screen_height: u16) -> Self {
        let h = screen_height as f32;
        let ceiling = h / 2.0 - h / dist;
        Self {
            ceiling,
            floor: h - ceiling,
        }
    }
}

/// Floor glyph for normalized offset below the horizon, `s` in `[0, 1]`.
pub fn floor_shade(s: f32) -> char {
    if s < 0.25 {
        FLOOR_SHADES[0]
    } else if s < 0.5 {
        FLOOR_SHADES[1]
    } else if s < 0.75 {
        FLOOR_SHADES[2]
    } else {
        FLOOR_SHADES[3]
    }
}

/// Fill column `col` of `grid` from a resolved ray hit.
///
/// The column is self-consistent; no depth test happens here.
pub fn rasterize_column(grid: &mut ScreenGrid, col: u16, hit: &RayHit, max_depth: f32) {
    let height = grid.height();
    let half = height as f32 / 2.0;
    let span = ColumnSpan::for_distance(hit.distance, height);
    let wall = hit.wall_glyph(max_depth);

    for y in 0..height {
        let fy = y as f32;
        let ch = if fy < span.ceiling {
            BLANK_GLYPH
        } else if fy > span.floor {
            floor_shade((fy - half) / half)
        } else {
            wall
        };
        grid.set(col, y, ch);
    }
}
