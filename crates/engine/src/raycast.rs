//! RayCaster - marches one ray per screen column through the tile grid
//!
//! A ray starts at the viewer and advances in fixed `ray_step` increments
//! until it either leaves the map (a miss at exactly `max_depth`), reaches
//! `max_depth`, or samples a wall cell. The first sampled distance inside the
//! wall is the hit distance.
//!
//! Wall hits are additionally classified as *boundary* hits when the ray
//! grazes one of the cell's visible corners. Boundary columns are drawn blank,
//! which outlines adjacent wall tiles without any per-edge geometry.

use crate::core::{Tile, TileMap};
use crate::types::{EngineConfig, Pose, BLANK_GLYPH, WALL_SHADES};

/// Result of casting a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Entry distance of the hit, or `max_depth` on a miss.
    pub distance: f32,
    /// The ray grazes a visible wall corner.
    pub boundary: bool,
    /// The wall cell hit, `None` on a miss.
    pub wall: Option<(i32, i32)>,
}

impl RayHit {
    fn miss(max_depth: f32) -> Self {
        Self {
            distance: max_depth,
            boundary: false,
            wall: None,
        }
    }

    /// Wall glyph for this hit: blank on boundaries and misses.
    pub fn wall_glyph(&self, max_depth: f32) -> char {
        if self.boundary {
            BLANK_GLYPH
        } else {
            wall_shade(self.distance, max_depth)
        }
    }
}

/// Ray angle for screen column `col`: sweeps from the left edge of the field
/// of view (`angle + fov/2`) to the right edge.
#[inline]
pub fn column_ray_angle(view_angle: f32, col: u16, screen_width: u16, fov: f32) -> f32 {
    let base = view_angle + fov / 2.0;
    base - (col as f32 / screen_width as f32) * fov
}

/// Screen-space direction of a ray angle (y inverted).
#[inline]
pub fn ray_direction(ray_angle: f32) -> (f32, f32) {
    (ray_angle.cos(), -ray_angle.sin())
}

/// March one ray from `pose` along `ray_angle`.
pub fn cast_ray(map: &TileMap, pose: &Pose, ray_angle: f32, config: &EngineConfig) -> RayHit {
    let (rx, ry) = ray_direction(ray_angle);
    let res = config.ray_step;
    let max_depth = config.max_depth;

    // Multiply instead of accumulating so long rays do not drift.
    let max_steps = (max_depth / res).ceil() as u32;
    for step in 1..=max_steps {
        let dist = res * step as f32;
        if dist >= max_depth {
            return RayHit::miss(max_depth);
        }

        let sx = pose.x + rx * dist;
        let sy = pose.y + ry * dist;
        let Some((cx, cy)) = map.cell_of(sx, sy) else {
            return RayHit::miss(max_depth);
        };

        if map.tile(cx, cy) == Some(Tile::Wall) {
            return RayHit {
                distance: dist,
                boundary: is_boundary(cx, cy, pose, (rx, ry), config),
                wall: Some((cx, cy)),
            };
        }
    }
    RayHit::miss(max_depth)
}

/// Cast the ray for one screen column.
pub fn cast_column(map: &TileMap, pose: &Pose, col: u16, screen_width: u16, config: &EngineConfig) -> RayHit {
    let angle = column_ray_angle(pose.angle, col, screen_width, config.fov);
    cast_ray(map, pose, angle, config)
}

/// Edge-outline test for wall cell `(cx, cy)`.
///
/// Each of the four cell corners is considered in turn. A corner whose
/// viewer-to-corner vector points away from the cell centre by more than the
/// facing cutoff is hidden behind the tile itself and skipped. For visible
/// corners, the ray is a boundary ray when its cosine to the viewer-to-corner
/// vector exceeds `boundary_dot_threshold`.
pub fn is_boundary(cx: i32, cy: i32, pose: &Pose, ray: (f32, f32), config: &EngineConfig) -> bool {
    let (rx, ry) = ray;
    for i in 0..2 {
        for j in 0..2 {
            let vx = (cx + i) as f32 - pose.x;
            let vy = (cy + j) as f32 - pose.y;
            let mag = (vx * vx + vy * vy).sqrt();
            if mag <= f32::EPSILON {
                continue;
            }

            // Corner to cell centre.
            let ccx = 0.5 - i as f32;
            let ccy = 0.5 - j as f32;
            let cmag = (ccx * ccx + ccy * ccy).sqrt();

            let facing = (ccx * vx + ccy * vy) / (mag * cmag);
            if facing < config.boundary_facing_threshold {
                continue;
            }

            let dot = (vx * rx + vy * ry) / mag;
            if dot > config.boundary_dot_threshold {
                return true;
            }
        }
    }
    false
}

/// Distance to wall glyph, four bands against `max_depth`.
pub fn wall_shade(dist: f32, max_depth: f32) -> char {
    if dist <= max_depth / 4.0 {
        WALL_SHADES[0]
    } else if dist < max_depth / 3.0 {
        WALL_SHADES[1]
    } else if dist < max_depth / 2.0 {
        WALL_SHADES[2]
    } else if dist < max_depth {
        WALL_SHADES[3]
    } else {
        BLANK_GLYPH
    }
}
