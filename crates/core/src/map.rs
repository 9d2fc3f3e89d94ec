//! TileMap module - the fixed 2-D grid the world is built on
//!
//! Cells are stored in a flat row-major vector (`y * width + x`) and never
//! change after load. World points are mapped to cells by flooring each
//! coordinate, so `(3.9, 0.2)` lies in cell `(3, 0)`.

use crate::error::MapError;

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
}

impl Tile {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Empty),
            _ => None,
        }
    }
}

/// Immutable wall/empty grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Tile>,
}

impl TileMap {
    /// Build a map from raw cells, rejecting a cell count that does not match.
    pub fn new(width: usize, height: usize, cells: Vec<Tile>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(MapError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// An all-empty map, mostly useful in tests and benches.
    ///
    /// Zero dimensions are bumped to 1.
    pub fn open(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Tile::Empty; width * height],
        }
    }

    /// Parse the text form: `#` wall, `.` empty, one row per line.
    ///
    /// Trailing blank lines are ignored; every other row must have the same
    /// length as the first.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while rows.last().is_some_and(|r| r.trim().is_empty()) {
            rows.pop();
        }
        let Some(first) = rows.first() else {
            return Err(MapError::Empty);
        };

        let width = first.chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(MapError::UnknownTile { row, col, ch })?;
                cells.push(tile);
            }
        }

        Self::new(width, rows.len(), cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, cx: i32, cy: i32) -> Option<usize> {
        if cx < 0 || cy < 0 || cx as usize >= self.width || cy as usize >= self.height {
            return None;
        }
        Some((cy as usize) * self.width + (cx as usize))
    }

    /// Tile at integer cell coordinates, `None` when out of bounds.
    pub fn tile(&self, cx: i32, cy: i32) -> Option<Tile> {
        self.index(cx, cy).map(|i| self.cells[i])
    }

    /// Integer cell containing a world point, `None` when out of bounds.
    #[inline]
    pub fn cell_of(&self, x: f32, y: f32) -> Option<(i32, i32)> {
        let cx = x.floor() as i32;
        let cy = y.floor() as i32;
        self.index(cx, cy).map(|_| (cx, cy))
    }

    /// True iff the point lies in `[0, width) x [0, height)`.
    #[inline]
    pub fn is_in_bounds(&self, x: f32, y: f32) -> bool {
        self.cell_of(x, y).is_some()
    }

    /// True when the point's cell is a wall.
    ///
    /// Callers must check [`TileMap::is_in_bounds`] first; querying outside
    /// the grid is a programming error.
    #[inline]
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        debug_assert!(
            self.is_in_bounds(x, y),
            "is_wall({x}, {y}) outside {}x{} map",
            self.width,
            self.height
        );
        matches!(self.tile(x.floor() as i32, y.floor() as i32), Some(Tile::Wall))
    }

    /// Out of bounds or wall: a point nothing may occupy.
    #[inline]
    pub fn is_blocked(&self, x: f32, y: f32) -> bool {
        match self.cell_of(x, y) {
            Some((cx, cy)) => self.tile(cx, cy) == Some(Tile::Wall),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "####\n#..#\n#..#\n####\n";

    #[test]
    fn parse_reads_rows_in_order() {
        let map = TileMap::parse(SMALL).unwrap();
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 4);
        assert_eq!(map.tile(0, 0), Some(Tile::Wall));
        assert_eq!(map.tile(1, 1), Some(Tile::Empty));
        assert_eq!(map.tile(4, 0), None);
        assert_eq!(map.tile(-1, 0), None);
    }

    #[test]
    fn parse_ignores_trailing_blank_lines_and_crlf() {
        let map = TileMap::parse("#.\r\n.#\r\n\r\n\n").unwrap();
        assert_eq!((map.width(), map.height()), (2, 2));
        assert_eq!(map.tile(1, 1), Some(Tile::Wall));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            TileMap::parse("###\n#.\n###"),
            Err(MapError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn parse_rejects_unknown_tiles_and_empty_text() {
        assert_eq!(
            TileMap::parse("#?#"),
            Err(MapError::UnknownTile {
                row: 0,
                col: 1,
                ch: '?'
            })
        );
        assert_eq!(TileMap::parse(""), Err(MapError::Empty));
        assert_eq!(TileMap::parse("\n\n"), Err(MapError::Empty));
    }

    #[test]
    fn new_rejects_wrong_cell_count() {
        assert_eq!(
            TileMap::new(2, 2, vec![Tile::Empty; 3]),
            Err(MapError::CellCountMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(TileMap::new(0, 2, vec![]), Err(MapError::Empty));
    }

    #[test]
    fn bounds_use_floored_coordinates() {
        let map = TileMap::open(4, 4);
        assert!(map.is_in_bounds(0.0, 0.0));
        assert!(map.is_in_bounds(3.999, 3.999));
        assert!(!map.is_in_bounds(4.0, 1.0));
        assert!(!map.is_in_bounds(1.0, 4.0));
        // -0.5 floors to -1, not 0.
        assert!(!map.is_in_bounds(-0.5, 1.0));
        assert!(map.is_blocked(-0.5, 1.0));
    }

    #[test]
    fn is_wall_is_total_over_in_bounds_points() {
        let map = TileMap::parse(SMALL).unwrap();
        for cy in 0..4 {
            for cx in 0..4 {
                let x = cx as f32 + 0.5;
                let y = cy as f32 + 0.5;
                let border = cx == 0 || cy == 0 || cx == 3 || cy == 3;
                assert_eq!(map.is_wall(x, y), border);
                assert_eq!(map.is_wall(x, y), map.is_wall(x, y));
            }
        }
    }
}
