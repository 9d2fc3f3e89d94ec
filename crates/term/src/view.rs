//! GridView: maps an engine `ScreenGrid` into a styled terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Glyphs are styled by class. The HUD overlays reuse `#` and `.`, which are
//! also floor glyphs, so overlay regions are passed in as rectangles and
//! always get the HUD style.

use crate::engine::ScreenGrid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    BULLET_GLYPH, FLOOR_SHADES, MINIMAP_FACING, MINIMAP_PLAYER, TARGET_GLYPH, WALL_SHADES,
};

/// Screen rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.width
            && (y - self.y) < self.height
    }
}

const WALL_STYLES: [CellStyle; 4] = [
    CellStyle::fg(Rgb::new(235, 235, 235)).bold(),
    CellStyle::fg(Rgb::new(190, 190, 190)),
    CellStyle::fg(Rgb::new(140, 140, 140)),
    CellStyle::fg(Rgb::new(95, 95, 95)).dim(),
];

const FLOOR_STYLES: [CellStyle; 4] = [
    CellStyle::fg(Rgb::new(70, 60, 45)).dim(),
    CellStyle::fg(Rgb::new(100, 85, 60)),
    CellStyle::fg(Rgb::new(130, 110, 75)),
    CellStyle::fg(Rgb::new(160, 135, 90)),
];

const BULLET_STYLE: CellStyle = CellStyle::fg(Rgb::new(255, 210, 60)).bold();
const TARGET_STYLE: CellStyle = CellStyle::fg(Rgb::new(230, 70, 70)).bold();
const HUD_STYLE: CellStyle = CellStyle::fg(Rgb::new(120, 200, 120));
const HUD_MARKER_STYLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 120)).bold();

/// Style for a glyph outside the HUD.
pub fn scene_style(ch: char) -> CellStyle {
    if let Some(i) = WALL_SHADES.iter().position(|&c| c == ch) {
        return WALL_STYLES[i];
    }
    if let Some(i) = FLOOR_SHADES.iter().position(|&c| c == ch) {
        return FLOOR_STYLES[i];
    }
    match ch {
        BULLET_GLYPH => BULLET_STYLE,
        TARGET_GLYPH => TARGET_STYLE,
        _ => CellStyle::default(),
    }
}

fn hud_style(ch: char) -> CellStyle {
    match ch {
        MINIMAP_PLAYER | MINIMAP_FACING => HUD_MARKER_STYLE,
        _ => HUD_STYLE,
    }
}

#[derive(Debug, Clone, Default)]
pub struct GridView {
    hud: Vec<Rect>,
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a region as HUD overlay.
    pub fn with_hud_rect(mut self, rect: Rect) -> Self {
        self.hud.push(rect);
        self
    }

    fn in_hud(&self, x: u16, y: u16) -> bool {
        self.hud.iter().any(|r| r.contains(x, y))
    }

    /// Render a grid into an existing framebuffer, resizing it to match.
    ///
    /// This is the allocation-free hot path once the framebuffer has the
    /// grid's size.
    pub fn render_into(&self, grid: &ScreenGrid, fb: &mut FrameBuffer) {
        fb.resize(grid.width(), grid.height());
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let ch = grid.get(x, y).unwrap_or(' ');
                let style = if self.in_hud(x, y) {
                    hud_style(ch)
                } else {
                    scene_style(ch)
                };
                fb.set(x, y, style.into_cell(ch));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &ScreenGrid) -> FrameBuffer {
        let mut fb = FrameBuffer::new(grid.width(), grid.height());
        self.render_into(grid, &mut fb);
        fb
    }
}
