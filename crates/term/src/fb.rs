//! Styled cells for terminal rendering.
//!
//! A [`FrameBuffer`] is the engine's row-major [`Grid`] holding styled
//! [`Cell`]s instead of bare glyphs.

use crate::engine::{Grid, GridCell};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl CellStyle {
    /// Light grey on black, no attributes.
    pub const PLAIN: Self = Self::fg(Rgb::new(220, 220, 220));
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl GridCell for Cell {
    const BLANK: Self = Self {
        ch: ' ',
        style: CellStyle::PLAIN,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D framebuffer of styled character cells.
pub type FrameBuffer = Grid<Cell>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_framebuffer_is_blank_plain_cells() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.cells().len(), 6);
        assert!(fb.cells().iter().all(|c| c.ch == ' ' && c.style == CellStyle::PLAIN));
    }

    #[test]
    fn style_builders_set_attributes() {
        let s = CellStyle::fg(Rgb::new(1, 2, 3)).bold();
        assert!(s.bold && !s.dim);
        assert_eq!(s.fg, Rgb::new(1, 2, 3));
        assert_eq!(s.bg, Rgb::default());
        assert_eq!(CellStyle::default().dim().into_cell('x').ch, 'x');
    }
}
