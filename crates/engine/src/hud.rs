//! Heads-up overlays: the status line and the minimap.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::{Tile, TileMap};
use crate::grid::ScreenGrid;
use crate::types::{
    Pose, MINIMAP_EMPTY, MINIMAP_FACING, MINIMAP_PLAYER, MINIMAP_WALL, STATUS_LINE_MAX,
};

/// Fixed-capacity status text so the frame loop never allocates for it.
pub type StatusLine = ArrayString<64>;

/// `X=.., Y=.., A=.. FPS=..`, truncated to [`STATUS_LINE_MAX`] characters.
pub fn status_line(pose: &Pose, fps: f32) -> StatusLine {
    let mut line = StatusLine::new();
    // Capacity overflow only truncates the readout.
    let _ = write!(
        line,
        "X={:3.2}, Y={:3.2}, A={:3.2} FPS={:3.2}",
        pose.x, pose.y, pose.angle, fps
    );
    if line.len() > STATUS_LINE_MAX {
        line.truncate(STATUS_LINE_MAX);
    }
    line
}

/// Overwrite the leading characters of row 0 with the status line.
pub fn draw_status(grid: &mut ScreenGrid, pose: &Pose, fps: f32) {
    grid.put_str(0, 0, &status_line(pose, fps));
}

/// Draw the map under the status line, then the facing marker and the player.
pub fn draw_minimap(grid: &mut ScreenGrid, map: &TileMap, pose: &Pose) {
    for my in 0..map.height() as i32 {
        for mx in 0..map.width() as i32 {
            let ch = match map.tile(mx, my) {
                Some(Tile::Wall) => MINIMAP_WALL,
                _ => MINIMAP_EMPTY,
            };
            grid.put(mx, my + 1, ch);
        }
    }

    let (fx, fy) = pose.forward();
    let cell_x = pose.x as i32 as f32;
    let cell_y = pose.y as i32 as f32;
    grid.put(
        (fx + cell_x + 0.5) as i32,
        (fy + cell_y + 1.5) as i32,
        MINIMAP_FACING,
    );
    grid.put(pose.x as i32, (pose.y + 1.0) as i32, MINIMAP_PLAYER);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_uses_two_decimals() {
        let s = status_line(&Pose::new(9.0, 7.0, 3.0), 59.876);
        assert_eq!(s.as_str(), "X=9.00, Y=7.00, A=3.00 FPS=59.88");
    }

    #[test]
    fn status_line_is_truncated() {
        let s = status_line(&Pose::new(123456.0, 654321.0, -3.0), 123456.0);
        assert_eq!(s.len(), STATUS_LINE_MAX);
        assert!(s.starts_with("X=123456.00, Y=654321.00"));
    }

    #[test]
    fn minimap_marks_player_and_facing() {
        let map = TileMap::parse("####\n#..#\n#..#\n####").unwrap();
        let mut grid = ScreenGrid::new(10, 6);
        // Facing east from cell (1, 1).
        draw_minimap(&mut grid, &map, &Pose::new(1.5, 1.5, 0.0));

        assert_eq!(grid.row_string(1), "####      ");
        assert_eq!(grid.get(1, 2), Some('P'));
        assert_eq!(grid.get(2, 2), Some('X'));
        assert_eq!(grid.get(1, 3), Some('.'));
        assert_eq!(grid.row_string(4), "####      ");
    }

    #[test]
    fn minimap_is_clipped_to_the_grid() {
        let map = TileMap::open(16, 16);
        let mut grid = ScreenGrid::new(4, 3);
        draw_minimap(&mut grid, &map, &Pose::new(15.5, 15.5, 0.0));
        assert_eq!(grid.row_string(0), "    ");
        assert_eq!(grid.row_string(2), "....");
    }
}
