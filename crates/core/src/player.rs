//! Player motion: rotation and reject-on-collision translation.

use crate::map::TileMap;
use crate::types::{wrap_angle, EngineConfig, Intents, Pose};

/// Result of applying one frame of intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionOutcome {
    pub rotated: bool,
    pub moved: bool,
    /// A translation was requested but the candidate cell was blocked.
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pose: Pose,
}

impl Player {
    pub fn new(pose: Pose) -> Self {
        Self { pose }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Rotate by `sign * turn_rate * player_speed * dt`.
    pub fn rotate(&mut self, sign: f32, config: &EngineConfig, dt: f32) {
        self.pose.angle = wrap_angle(self.pose.angle + sign * config.turn_rate * config.player_speed * dt);
    }

    /// Try to move by `(dx, dy)`. The move is committed only when the
    /// candidate point is in bounds and not a wall; otherwise the pose stays
    /// exactly as it was (no sliding).
    pub fn try_translate(&mut self, map: &TileMap, dx: f32, dy: f32) -> bool {
        let nx = self.pose.x + dx;
        let ny = self.pose.y + dy;
        if map.is_blocked(nx, ny) {
            return false;
        }
        self.pose.x = nx;
        self.pose.y = ny;
        true
    }

    /// Apply one frame of intents: rotation first, then forward and backward
    /// translation along the updated heading.
    pub fn apply(&mut self, intents: &Intents, map: &TileMap, config: &EngineConfig, dt: f32) -> MotionOutcome {
        let mut outcome = MotionOutcome::default();

        let sign = intents.rotation_sign();
        if sign != 0.0 {
            self.rotate(sign, config, dt);
            outcome.rotated = true;
        }

        let (fx, fy) = self.pose.forward();
        let step = config.player_speed * dt;
        let (mx, my) = (fx * step, fy * step);

        for (wanted, dx, dy) in [
            (intents.move_forward, mx, my),
            (intents.move_backward, -mx, -my),
        ] {
            if !wanted {
                continue;
            }
            if self.try_translate(map, dx, dy) {
                outcome.moved = true;
            } else {
                outcome.blocked = true;
            }
        }

        outcome
    }
}
