//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! Everything here is plain data with no I/O, so it can be shared by the
//! simulation, the raycasting engine, the input layer and the terminal sink.
//!
//! # Coordinates
//!
//! World coordinates are measured in tile widths. `x` grows to the right and
//! `y` grows *downwards* (row order of the map text), so a heading `a` points
//! along `(cos a, -sin a)`. Angles are radians normalized to `(-π, π]`.
//!
//! # Tunable Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FOV` | π/4 | Horizontal field of view |
//! | `DEFAULT_RAY_STEP` | 0.1 | Ray marching increment |
//! | `DEFAULT_MAX_DEPTH` | 20.0 | Depth of field (miss distance) |
//! | `DEFAULT_PLAYER_SPEED` | 4.0 | Translation speed, tiles/s |
//! | `DEFAULT_TURN_RATE` | 0.3 | Rotation factor applied to player speed |
//! | `DEFAULT_BULLET_SPEED` | 5.0 | Projectile speed, tiles/s |
//! | `DEFAULT_BOUNDARY_DOT` | 0.99995 | Cosine above which a ray grazes a wall edge |
//! | `DEFAULT_BOUNDARY_FACING` | -0.6675 | Corner visibility cutoff |
//! | `DEFAULT_TARGET_PRECISION` | 0.07 | Per-axis projectile/target hit window |
//! | `DEFAULT_SCREEN_WIDTH` | 240 | Output columns |
//! | `DEFAULT_SCREEN_HEIGHT` | 80 | Output rows |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{wrap_angle, EngineConfig, Pose};
//!
//! let config = EngineConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let pose = Pose::new(2.0, 2.0, 0.0);
//! let (fx, fy) = pose.forward();
//! assert!((fx - 1.0).abs() < 1e-6 && fy.abs() < 1e-6);
//!
//! assert!((wrap_angle(3.0 * std::f32::consts::PI) - std::f32::consts::PI).abs() < 1e-5);
//! ```

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal field of view (π/4).
pub const DEFAULT_FOV: f32 = PI / 4.0;

/// Ray marching resolution in tile widths.
pub const DEFAULT_RAY_STEP: f32 = 0.1;

/// Depth of field: rays that travel this far without hitting a wall miss.
pub const DEFAULT_MAX_DEPTH: f32 = 20.0;

/// Player translation speed in tiles per second.
pub const DEFAULT_PLAYER_SPEED: f32 = 4.0;

/// Rotation speed as a fraction of player speed (radians per second per unit speed).
pub const DEFAULT_TURN_RATE: f32 = 0.3;

/// Projectile speed in tiles per second.
pub const DEFAULT_BULLET_SPEED: f32 = 5.0;

/// A ray whose cosine to a visible wall corner exceeds this is drawn as an edge outline.
pub const DEFAULT_BOUNDARY_DOT: f32 = 0.99995;

/// Corners whose facing cosine is below this (about -45°) are hidden behind their own tile.
pub const DEFAULT_BOUNDARY_FACING: f32 = -0.6675;

/// Per-axis window inside which a projectile hits a target.
pub const DEFAULT_TARGET_PRECISION: f32 = 0.07;

/// Output width in columns.
pub const DEFAULT_SCREEN_WIDTH: u16 = 240;

/// Output height in rows.
pub const DEFAULT_SCREEN_HEIGHT: u16 = 80;

/// Lower clamp for frame elapsed time, in seconds.
pub const MIN_ELAPSED_SECS: f32 = 1e-4;

/// Upper clamp for frame elapsed time, in seconds.
pub const MAX_ELAPSED_SECS: f32 = 0.25;

/// Maximum number of characters of the status line.
pub const STATUS_LINE_MAX: usize = 40;

/// Wall shade glyphs, nearest first.
pub const WALL_SHADES: [char; 4] = ['█', '▓', '▒', '░'];

/// Floor shade glyphs, horizon first.
pub const FLOOR_SHADES: [char; 4] = ['-', '.', 'x', '#'];

/// Blank cell (sky, void, wall outline).
pub const BLANK_GLYPH: char = ' ';

/// Glyph used for projectile discs.
pub const BULLET_GLYPH: char = '°';

/// Glyph used for target slivers.
pub const TARGET_GLYPH: char = '|';

/// Minimap wall / empty / player / facing glyphs.
pub const MINIMAP_WALL: char = '#';
pub const MINIMAP_EMPTY: char = '.';
pub const MINIMAP_PLAYER: char = 'P';
pub const MINIMAP_FACING: char = 'X';

/// Wrap an angle into `(-π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

/// Viewer position and heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    /// Heading in radians, `(-π, π]`.
    pub angle: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            x,
            y,
            angle: wrap_angle(angle),
        }
    }

    /// Forward unit vector in screen-space (y inverted).
    pub fn forward(&self) -> (f32, f32) {
        (self.angle.cos(), -self.angle.sin())
    }
}

/// Discrete controls a player can issue.
///
/// Key bindings live in the input crate; the simulation only sees [`Intents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    RotateLeft,
    RotateRight,
    MoveForward,
    MoveBackward,
    Fire,
}

impl Control {
    /// Parse a control from its script letter (`a d w s f`).
    pub fn from_script(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'a' => Some(Control::RotateLeft),
            'd' => Some(Control::RotateRight),
            'w' => Some(Control::MoveForward),
            's' => Some(Control::MoveBackward),
            'f' => Some(Control::Fire),
            _ => None,
        }
    }
}

/// Intent signals sampled once per frame.
///
/// `fire` is edge-triggered: it is true only on the frame the trigger goes
/// from released to pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intents {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub move_forward: bool,
    pub move_backward: bool,
    pub fire: bool,
}

impl Intents {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, control: Control) -> Self {
        self.set(control, true);
        self
    }

    pub fn set(&mut self, control: Control, on: bool) {
        match control {
            Control::RotateLeft => self.rotate_left = on,
            Control::RotateRight => self.rotate_right = on,
            Control::MoveForward => self.move_forward = on,
            Control::MoveBackward => self.move_backward = on,
            Control::Fire => self.fire = on,
        }
    }

    /// Net rotation direction: +1 left, -1 right, 0 when both or neither.
    pub fn rotation_sign(&self) -> f32 {
        match (self.rotate_left, self.rotate_right) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("screen dimensions must be non-zero, got {width}x{height}")]
    ZeroScreen { width: u16, height: u16 },
}

/// Every tunable of the renderer and simulation.
///
/// Missing fields deserialize to their defaults so a config file only needs
/// to name the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fov: f32,
    pub ray_step: f32,
    pub max_depth: f32,
    pub player_speed: f32,
    pub turn_rate: f32,
    pub bullet_speed: f32,
    pub boundary_dot_threshold: f32,
    pub boundary_facing_threshold: f32,
    pub target_hit_precision: f32,
    pub screen_width: u16,
    pub screen_height: u16,
    pub show_minimap: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            ray_step: DEFAULT_RAY_STEP,
            max_depth: DEFAULT_MAX_DEPTH,
            player_speed: DEFAULT_PLAYER_SPEED,
            turn_rate: DEFAULT_TURN_RATE,
            bullet_speed: DEFAULT_BULLET_SPEED,
            boundary_dot_threshold: DEFAULT_BOUNDARY_DOT,
            boundary_facing_threshold: DEFAULT_BOUNDARY_FACING,
            target_hit_precision: DEFAULT_TARGET_PRECISION,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            show_minimap: true,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("fov", self.fov),
            ("ray_step", self.ray_step),
            ("max_depth", self.max_depth),
            ("player_speed", self.player_speed),
            ("turn_rate", self.turn_rate),
            ("bullet_speed", self.bullet_speed),
            ("target_hit_precision", self.target_hit_precision),
        ];
        for (name, value) in positive {
            // NaN fails this comparison too.
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::ZeroScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        Ok(())
    }
}
