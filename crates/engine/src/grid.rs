//! Row-major cell grids.
//!
//! [`ScreenGrid`] is the glyph grid every frame is rasterized into; the
//! terminal crate stores styled cells in the same [`Grid`] shape.

use std::fmt;

use crate::types::BLANK_GLYPH;

/// A value a grid can hold. `BLANK` fills new and resized cells.
pub trait GridCell: Copy {
    const BLANK: Self;
}

impl GridCell for char {
    const BLANK: Self = BLANK_GLYPH;
}

/// 2D grid, row-major, bounds-checked on every access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u16,
    height: u16,
    cells: Vec<T>,
}

/// Glyph grid, fully overwritten every frame.
pub type ScreenGrid = Grid<char>;

impl<T: GridCell> Grid<T> {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![T::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize in place; cell contents are unspecified afterwards.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells.resize((width as usize) * (height as usize), T::BLANK);
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Rows top to bottom. An empty grid yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on zero; with zero width there are no cells.
        self.cells.chunks_exact((self.width as usize).max(1))
    }

    pub fn row(&self, y: u16) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<T> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, value: T) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = value;
        }
    }

    /// Signed-coordinate variant of [`Grid::set`]; negative or oversized
    /// coordinates are dropped.
    pub fn put(&mut self, x: i32, y: i32, value: T) {
        if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
            self.set(x, y, value);
        }
    }

    pub fn clear(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl Grid<char> {
    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.set(cx, y, ch);
        }
    }

    pub fn row_string(&self, y: u16) -> String {
        self.row(y).map(|r| r.iter().collect()).unwrap_or_default()
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().take(self.height as usize).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                fmt::Write::write_char(f, ch)?;
            }
        }
        Ok(())
    }
}
