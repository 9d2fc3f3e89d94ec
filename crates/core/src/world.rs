//! World aggregate: map, player, projectiles and targets for one session.
//!
//! The frame loop is:
//!
//! 1. [`World::step`] - player motion, projectile integration, firing
//! 2. render (engine crate) - reads the world, skips removed entities
//! 3. [`World::end_frame`] - compacts removed projectiles and targets

use log::debug;

use crate::level::Level;
use crate::map::TileMap;
use crate::player::{MotionOutcome, Player};
use crate::projectile::ProjectileEngine;
use crate::target::TargetRegistry;
use crate::types::{EngineConfig, Intents, Pose};

/// Initial capacity of the projectile set.
const PROJECTILE_CAPACITY: usize = 64;

/// What happened during one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub motion: MotionOutcome,
    pub fired: bool,
    pub projectiles_retired: u32,
    pub targets_hit: u32,
}

#[derive(Debug, Clone)]
pub struct World {
    config: EngineConfig,
    map: TileMap,
    player: Player,
    projectiles: ProjectileEngine,
    targets: TargetRegistry,
}

impl World {
    pub fn new(level: Level, config: EngineConfig) -> Self {
        Self {
            config,
            player: Player::new(level.start),
            targets: TargetRegistry::new(&level.targets),
            map: level.map,
            projectiles: ProjectileEngine::with_capacity(PROJECTILE_CAPACITY),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn pose(&self) -> Pose {
        self.player.pose()
    }

    pub fn projectiles(&self) -> &ProjectileEngine {
        &self.projectiles
    }

    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// A projectile fired this step appears at its spawn point and starts
    /// moving on the next step.
    pub fn step(&mut self, intents: &Intents, dt: f32) -> StepReport {
        let motion = self.player.apply(intents, &self.map, &self.config, dt);

        let projectile_step = self.projectiles.step(
            &self.map,
            &mut self.targets,
            self.config.bullet_speed,
            self.config.target_hit_precision,
            dt,
        );

        if intents.fire {
            self.projectiles.fire(&self.player.pose());
        }

        let report = StepReport {
            motion,
            fired: intents.fire,
            projectiles_retired: projectile_step.retired,
            targets_hit: projectile_step.targets_hit,
        };
        if report.targets_hit > 0 {
            debug!("{} targets left", self.targets.alive_count());
        }
        report
    }

    /// End-of-frame compaction of removed entities.
    pub fn end_frame(&mut self) {
        self.projectiles.compact();
        self.targets.compact();
    }
}
