//! Simulation module - pure, deterministic, and testable
//!
//! This crate holds the world the renderer looks at. It has **zero
//! dependencies** on terminals or rendering, so every rule can be unit tested:
//!
//! - [`map`]: immutable wall/empty tile grid with bounds and wall queries
//! - [`level`]: map + player start + target placement, validated at load
//! - [`player`]: rotation and reject-on-collision translation
//! - [`projectile`]: projectile integration and retirement
//! - [`target`]: static targets removed on impact
//! - [`world`]: the aggregate stepped once per frame
//! - [`clock`]: clamped frame timing
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{Level, TileMap, World};
//! use tui_raycaster_types::{Control, EngineConfig, Intents, Pose};
//!
//! let level = Level::new(TileMap::open(4, 4), Pose::new(2.0, 2.0, 0.0), vec![]).unwrap();
//! let mut world = World::new(level, EngineConfig::default());
//!
//! let report = world.step(&Intents::none().with(Control::Fire), 0.016);
//! assert!(report.fired);
//! assert_eq!(world.projectiles().alive().count(), 1);
//! ```

pub mod clock;
pub mod error;
pub mod level;
pub mod map;
pub mod player;
pub mod projectile;
pub mod target;
pub mod world;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use clock::{clamp_elapsed, FrameClock};
pub use error::{LevelError, MapError};
pub use level::{Level, DEFAULT_MAP, DEFAULT_START, DEFAULT_TARGETS};
pub use map::{Tile, TileMap};
pub use player::{MotionOutcome, Player};
pub use projectile::{Projectile, ProjectileEngine, ProjectileStep, Retirement};
pub use target::{Lifecycle, Target, TargetRegistry};
pub use world::{StepReport, World};
