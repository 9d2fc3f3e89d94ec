//! Sprite projector - billboards bullets and targets onto the screen
//!
//! A world point is projected to an angle relative to the viewer's heading;
//! that angle maps linearly onto a screen column. The footprint drawn around
//! the column depends on the sprite kind:
//!
//! - **Target**: a two-column sliver from `h/2 - h/(5d)` to `h/2 + h/d`,
//!   taller below the horizon like a standing figure.
//! - **Bullet**: a disc of apparent radius `h/(4d)` centred on the horizon.
//!
//! Every column the footprint touches goes through the depth buffer's
//! test-and-set, so nearer walls and sprites win regardless of draw order.

use std::f32::consts::TAU;

use crate::depth::DepthBuffer;
use crate::grid::ScreenGrid;
use crate::types::{wrap_angle, EngineConfig, Pose, BULLET_GLYPH, TARGET_GLYPH};

/// Targets nearer than this are not drawn.
pub const TARGET_MIN_DISTANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Bullet,
    Target,
}

impl SpriteKind {
    pub fn glyph(&self) -> char {
        match self {
            SpriteKind::Bullet => BULLET_GLYPH,
            SpriteKind::Target => TARGET_GLYPH,
        }
    }
}

/// A drawable world point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: f32,
    pub y: f32,
}

impl Sprite {
    pub fn bullet(x: f32, y: f32) -> Self {
        Self {
            kind: SpriteKind::Bullet,
            x,
            y,
        }
    }

    pub fn target(x: f32, y: f32) -> Self {
        Self {
            kind: SpriteKind::Target,
            x,
            y,
        }
    }
}

/// Screen-space placement of a world point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Angle off the view direction, `(-π, π]`; negative is left of centre.
    pub angle: f32,
    pub distance: f32,
    /// Horizontal screen column of the point.
    pub center: i32,
}

/// Angle of `(px, py)` relative to the viewer's heading, wrapped to `(-π, π]`.
pub fn relative_angle(pose: &Pose, px: f32, py: f32) -> f32 {
    let vx = px - pose.x;
    let vy = py - pose.y;
    let mut raw = (-vy).atan2(vx);
    // Keep the angle continuous across the atan2 branch cut (y is inverted).
    if vy > 0.0 {
        raw += TAU;
    }
    wrap_angle(pose.angle - raw)
}

/// Project a world point; `None` when it lies outside the field of view.
pub fn project(pose: &Pose, px: f32, py: f32, fov: f32, screen_width: u16) -> Option<Projection> {
    let angle = relative_angle(pose, px, py);
    if angle.abs() > fov / 2.0 {
        return None;
    }

    let vx = px - pose.x;
    let vy = py - pose.y;
    let distance = (vx * vx + vy * vy).sqrt();
    let center = ((angle + fov / 2.0) / fov * screen_width as f32 + 0.5).floor() as i32;

    Some(Projection {
        angle,
        distance,
        center,
    })
}

/// Draw a sprite. Returns true when at least one column won the depth test.
pub fn draw_sprite(
    sprite: &Sprite,
    pose: &Pose,
    config: &EngineConfig,
    depth: &mut DepthBuffer,
    grid: &mut ScreenGrid,
) -> bool {
    let Some(proj) = project(pose, sprite.x, sprite.y, config.fov, grid.width()) else {
        return false;
    };
    match sprite.kind {
        SpriteKind::Target => draw_target(&proj, depth, grid),
        SpriteKind::Bullet => draw_bullet(&proj, depth, grid),
    }
}

fn draw_target(proj: &Projection, depth: &mut DepthBuffer, grid: &mut ScreenGrid) -> bool {
    let dist = proj.distance;
    if dist < TARGET_MIN_DISTANCE {
        return false;
    }

    let w = grid.width() as i32;
    let h = grid.height() as f32;
    let start_x = (proj.center - 1).max(0);
    let end_x = (proj.center + 1).min(w);
    let start_y = (h / 2.0 - h / (dist * 5.0)) as i32;
    let end_y = (h / 2.0 + h / dist) as i32;

    let mut drew = false;
    for col in start_x..end_x {
        drew |= fill_column(col, start_y, end_y, dist, SpriteKind::Target.glyph(), depth, grid);
    }
    drew
}

fn draw_bullet(proj: &Projection, depth: &mut DepthBuffer, grid: &mut ScreenGrid) -> bool {
    let dist = proj.distance;
    if dist <= f32::EPSILON {
        return false;
    }

    let w = grid.width() as i32;
    let h = grid.height() as f32;
    let radius = h / (dist * 4.0);
    let center = proj.center as f32;
    let start_x = ((center - 2.0 * radius) as i32).max(0);
    let end_x = ((center + 2.0 * radius) as i32).min(w);

    let mut drew = false;
    for col in start_x..end_x {
        let offset = (col - proj.center) as f32;
        let chord = radius * radius - offset * offset;
        if chord < 0.0 {
            continue;
        }
        let half = chord.sqrt();
        let start_y = (h / 2.0 - half) as i32;
        let end_y = (h / 2.0 + half) as i32;
        drew |= fill_column(col, start_y, end_y, dist, SpriteKind::Bullet.glyph(), depth, grid);
    }
    drew
}

/// Fill rows `[start_y, end_y)` of `col` if the column passes the depth test.
fn fill_column(
    col: i32,
    start_y: i32,
    end_y: i32,
    dist: f32,
    glyph: char,
    depth: &mut DepthBuffer,
    grid: &mut ScreenGrid,
) -> bool {
    let start_y = start_y.max(0);
    let end_y = end_y.min(grid.height() as i32);
    if start_y >= end_y || col < 0 {
        return false;
    }
    if !depth.test_and_set(col as usize, dist) {
        return false;
    }
    for y in start_y..end_y {
        grid.put(col, y, glyph);
    }
    true
}
