#![allow(dead_code)]

use tui_raycaster::core::{Level, TileMap, World};
use tui_raycaster::types::{EngineConfig, Pose};

/// A `width` x `height` map walled on its border, with extra walls at `walls`.
pub fn walled_map(width: usize, height: usize, walls: &[(usize, usize)]) -> TileMap {
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            let border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
            text.push(if border || walls.contains(&(x, y)) { '#' } else { '.' });
        }
        text.push('\n');
    }
    TileMap::parse(&text).unwrap()
}

pub fn world(map: TileMap, start: Pose, targets: Vec<(f32, f32)>) -> World {
    world_with(map, start, targets, EngineConfig::default())
}

pub fn world_with(map: TileMap, start: Pose, targets: Vec<(f32, f32)>, config: EngineConfig) -> World {
    World::new(Level::new(map, start, targets).unwrap(), config)
}

pub fn no_minimap() -> EngineConfig {
    EngineConfig {
        show_minimap: false,
        ..EngineConfig::default()
    }
}
