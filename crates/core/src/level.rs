//! Level: a tile map plus where the player and the targets start.

use std::f32::consts::PI;

use log::info;

use crate::error::LevelError;
use crate::map::TileMap;
use crate::types::Pose;

/// Built-in 16x16 map. The open cells on the top and right edges let rays
/// escape into the void.
pub const DEFAULT_MAP: &str = "\
#############...
#...............
#.......########
####...........#
#......##......#
#......###...###
#..............#
#..............#
#..............#
#.#.....###..###
#.#.....#......#
#.#.....#......#
#.#............#
#.####..........
#..............#
################
";

/// Player start on the built-in map, facing west.
pub const DEFAULT_START: Pose = Pose {
    x: 9.0,
    y: 7.0,
    angle: PI,
};

/// Targets placed on the built-in map.
pub const DEFAULT_TARGETS: [(f32, f32); 2] = [(6.0, 7.0), (12.0, 13.0)];

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub map: TileMap,
    pub start: Pose,
    pub targets: Vec<(f32, f32)>,
}

impl Level {
    /// Validate a level: the start pose and every target must sit on an open cell.
    pub fn new(map: TileMap, start: Pose, targets: Vec<(f32, f32)>) -> Result<Self, LevelError> {
        if map.is_blocked(start.x, start.y) {
            return Err(LevelError::StartBlocked {
                x: start.x,
                y: start.y,
            });
        }
        if let Some((index, &(x, y))) = targets
            .iter()
            .enumerate()
            .find(|(_, (x, y))| map.is_blocked(*x, *y))
        {
            return Err(LevelError::TargetBlocked { index, x, y });
        }

        info!(
            "level loaded: {}x{} map, start ({:.2}, {:.2}), {} targets",
            map.width(),
            map.height(),
            start.x,
            start.y,
            targets.len()
        );
        Ok(Self {
            map,
            start,
            targets,
        })
    }

    /// The built-in map with its default spawn layout.
    pub fn builtin() -> Result<Self, LevelError> {
        let map = TileMap::parse(DEFAULT_MAP)?;
        Self::new(map, DEFAULT_START, DEFAULT_TARGETS.to_vec())
    }

    /// Replace the map and re-validate the spawn layout against it.
    pub fn with_map(self, map: TileMap) -> Result<Self, LevelError> {
        Self::new(map, self.start, self.targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_level_is_valid() {
        let level = Level::builtin().unwrap();
        assert_eq!(level.map.width(), 16);
        assert_eq!(level.map.height(), 16);
        assert_eq!(level.targets.len(), 2);
    }

    #[test]
    fn start_inside_wall_is_rejected() {
        let map = TileMap::parse("###\n#.#\n###").unwrap();
        let err = Level::new(map, Pose::new(0.5, 0.5, 0.0), vec![]).unwrap_err();
        assert!(matches!(err, LevelError::StartBlocked { .. }));
    }

    #[test]
    fn target_outside_map_is_rejected() {
        let map = TileMap::parse("###\n#.#\n###").unwrap();
        let err = Level::new(map, Pose::new(1.5, 1.5, 0.0), vec![(1.5, 1.5), (9.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            LevelError::TargetBlocked {
                index: 1,
                x: 9.0,
                y: 1.0
            }
        );
    }

    #[test]
    fn with_map_revalidates_layout() {
        let level = Level::builtin().unwrap();
        let tiny = TileMap::open(3, 3);
        assert!(matches!(
            level.with_map(tiny),
            Err(LevelError::StartBlocked { .. })
        ));
    }
}
