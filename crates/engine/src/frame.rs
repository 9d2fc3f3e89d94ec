//! FrameRenderer: runs the whole per-frame pipeline into a screen grid.
//!
//! Order matters: walls must be cast and rasterized before any sprite is
//! drawn, because sprites occlude against the wall distances.

use crate::core::World;
use crate::depth::DepthBuffer;
use crate::grid::ScreenGrid;
use crate::hud::{draw_minimap, draw_status};
use crate::raster::rasterize_column;
use crate::raycast::cast_column;
use crate::sprite::{draw_sprite, Sprite};

#[derive(Debug, Clone)]
pub struct FrameRenderer {
    depth: DepthBuffer,
}

impl FrameRenderer {
    pub fn new(screen_width: u16, max_depth: f32) -> Self {
        Self {
            depth: DepthBuffer::new(screen_width as usize, max_depth),
        }
    }

    /// Depth buffer as left by the last rendered frame.
    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Render the world into `grid` using the grid's own dimensions.
    ///
    /// Reuses the depth buffer and the grid across frames; with a stable
    /// screen size this does not allocate.
    pub fn render(&mut self, world: &World, fps: f32, grid: &mut ScreenGrid) {
        self.render_scene(world, grid);

        let pose = world.pose();
        if world.config().show_minimap {
            draw_minimap(grid, world.map(), &pose);
        }
        draw_status(grid, &pose, fps);
    }

    /// Walls, floor, ceiling and sprites without the HUD overlays.
    pub fn render_scene(&mut self, world: &World, grid: &mut ScreenGrid) {
        let config = world.config();
        let width = grid.width();
        let pose = world.pose();

        self.depth.reset(width as usize, config.max_depth);

        for col in 0..width {
            let hit = cast_column(world.map(), &pose, col, width, config);
            self.depth.test_and_set(col as usize, hit.distance);
            rasterize_column(grid, col, &hit, config.max_depth);
        }

        for target in world.targets().alive() {
            draw_sprite(&Sprite::target(target.x, target.y), &pose, config, &mut self.depth, grid);
        }
        for projectile in world.projectiles().alive() {
            draw_sprite(
                &Sprite::bullet(projectile.x, projectile.y),
                &pose,
                config,
                &mut self.depth,
                grid,
            );
        }
    }
}
