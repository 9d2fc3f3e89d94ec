//! Projectile engine - integrates live projectiles and retires them on impact
//!
//! State machine per projectile: `Alive -> {Alive, Removed}`. Each step moves
//! the projectile by `velocity * speed * dt`, then checks, in order:
//!
//! 1. the point left the map,
//! 2. the point is within the hit window of a live target (the target is
//!    removed too),
//! 3. the point's cell is a wall.
//!
//! Removed projectiles stay in the collection until [`ProjectileEngine::compact`]
//! runs at end of frame; everything that iterates for drawing skips them.

use log::debug;

use crate::map::TileMap;
use crate::target::{Lifecycle, TargetRegistry};
use crate::types::Pose;

/// Why a projectile was retired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retirement {
    OutOfBounds,
    HitTarget(usize),
    HitWall,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    /// Unit direction.
    pub vx: f32,
    pub vy: f32,
    state: Lifecycle,
}

impl Projectile {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            state: Lifecycle::Alive,
        }
    }

    /// Spawn one tile ahead of the viewer, travelling along its heading.
    pub fn fired_from(pose: &Pose) -> Self {
        let (fx, fy) = pose.forward();
        Self::new(pose.x + fx, pose.y + fy, fx, fy)
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == Lifecycle::Alive
    }

    /// Advance one step. Returns the retirement reason when this step kills it.
    fn advance(
        &mut self,
        map: &TileMap,
        targets: &mut TargetRegistry,
        speed: f32,
        precision: f32,
        dt: f32,
    ) -> Option<Retirement> {
        if !self.is_alive() {
            return None;
        }

        self.x += self.vx * speed * dt;
        self.y += self.vy * speed * dt;

        let reason = if !map.is_in_bounds(self.x, self.y) {
            Some(Retirement::OutOfBounds)
        } else if let Some(index) = targets.find_hit(self.x, self.y, precision) {
            targets.remove(index);
            Some(Retirement::HitTarget(index))
        } else if map.is_wall(self.x, self.y) {
            Some(Retirement::HitWall)
        } else {
            None
        };

        if reason.is_some() {
            self.state = Lifecycle::Removed;
        }
        reason
    }
}

/// Counts produced by one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectileStep {
    pub retired: u32,
    pub targets_hit: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectileEngine {
    live: Vec<Projectile>,
}

impl ProjectileEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the live set so firing does not allocate in the frame loop.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live: Vec::with_capacity(capacity),
        }
    }

    pub fn spawn(&mut self, projectile: Projectile) {
        debug!(
            "projectile spawned at ({:.2}, {:.2}) heading ({:.2}, {:.2})",
            projectile.x, projectile.y, projectile.vx, projectile.vy
        );
        self.live.push(projectile);
    }

    pub fn fire(&mut self, pose: &Pose) {
        self.spawn(Projectile::fired_from(pose));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter().filter(|p| p.is_alive())
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Advance every live projectile by `dt` seconds.
    pub fn step(
        &mut self,
        map: &TileMap,
        targets: &mut TargetRegistry,
        speed: f32,
        precision: f32,
        dt: f32,
    ) -> ProjectileStep {
        let mut out = ProjectileStep::default();
        for p in &mut self.live {
            let Some(reason) = p.advance(map, targets, speed, precision, dt) else {
                continue;
            };
            out.retired += 1;
            if let Retirement::HitTarget(index) = reason {
                out.targets_hit += 1;
                debug!("target {index} hit at ({:.2}, {:.2})", p.x, p.y);
            } else {
                debug!("projectile retired ({reason:?}) at ({:.2}, {:.2})", p.x, p.y);
            }
        }
        out
    }

    /// Purge removed projectiles.
    pub fn compact(&mut self) {
        self.live.retain(Projectile::is_alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn fired_projectile_starts_one_tile_ahead() {
        let p = Projectile::fired_from(&Pose::new(2.0, 2.0, 0.0));
        assert_approx_eq!(p.x, 3.0);
        assert_approx_eq!(p.y, 2.0);
        assert_approx_eq!(p.vx, 1.0);
        assert_approx_eq!(p.vy, 0.0);
        assert!(p.is_alive());
    }

    #[test]
    fn step_integrates_velocity() {
        let map = TileMap::open(10, 10);
        let mut targets = TargetRegistry::default();
        let mut engine = ProjectileEngine::new();
        engine.spawn(Projectile::new(2.0, 2.0, 0.0, 1.0));
        let out = engine.step(&map, &mut targets, 5.0, 0.07, 0.1);
        assert_eq!(out, ProjectileStep::default());
        let p = engine.iter().next().unwrap();
        assert_approx_eq!(p.x, 2.0);
        assert_approx_eq!(p.y, 2.5);
    }

    #[test]
    fn leaving_the_map_retires() {
        let map = TileMap::open(4, 4);
        let mut targets = TargetRegistry::default();
        let mut engine = ProjectileEngine::new();
        engine.spawn(Projectile::new(3.5, 1.0, 1.0, 0.0));
        let out = engine.step(&map, &mut targets, 5.0, 0.07, 0.2);
        assert_eq!(out.retired, 1);
        assert_eq!(engine.iter().next().unwrap().state(), Lifecycle::Removed);
    }

    #[test]
    fn removed_projectiles_do_not_move_and_are_compacted() {
        let map = TileMap::open(4, 4);
        let mut targets = TargetRegistry::default();
        let mut engine = ProjectileEngine::new();
        engine.spawn(Projectile::new(3.5, 1.0, 1.0, 0.0));
        engine.step(&map, &mut targets, 5.0, 0.07, 0.2);
        let before = *engine.iter().next().unwrap();

        let out = engine.step(&map, &mut targets, 5.0, 0.07, 0.2);
        assert_eq!(out.retired, 0);
        assert_eq!(*engine.iter().next().unwrap(), before);
        assert_eq!(engine.alive().count(), 0);

        engine.compact();
        assert!(engine.is_empty());
    }

    #[test]
    fn target_check_runs_before_wall_check() {
        // A target sitting right at a wall face is still hit.
        let map = TileMap::parse("....#\n....#").unwrap();
        let mut targets = TargetRegistry::new(&[(4.02, 0.5)]);
        let mut engine = ProjectileEngine::new();
        engine.spawn(Projectile::new(3.9, 0.5, 1.0, 0.0));
        let out = engine.step(&map, &mut targets, 1.0, 0.07, 0.15);
        assert_eq!(out.targets_hit, 1);
        assert_eq!(targets.alive_count(), 0);
    }
}
