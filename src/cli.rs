//! Command line options shared by the binaries.
//!
//! Settings are layered: built-in defaults, then an optional JSON config file,
//! then individual flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, LevelFilter};

use crate::core::{Level, TileMap};
use crate::types::EngineConfig;

#[derive(clap::Args, Debug, Clone)]
pub struct EngineArgs {
    /// JSON file with engine settings; missing fields keep their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Map file (`#` wall, `.` empty, one row per line).
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Horizontal field of view in radians.
    #[arg(long)]
    pub fov: Option<f32>,

    /// Distance at which a ray gives up.
    #[arg(long)]
    pub max_depth: Option<f32>,

    /// Ray marching increment.
    #[arg(long)]
    pub ray_step: Option<f32>,

    /// Player speed in tiles per second.
    #[arg(long)]
    pub player_speed: Option<f32>,

    /// Projectile speed in tiles per second.
    #[arg(long)]
    pub bullet_speed: Option<f32>,

    /// Per-axis distance at which a projectile hits a target.
    #[arg(long)]
    pub precision: Option<f32>,

    /// Cosine above which a ray counts as grazing a wall edge.
    #[arg(long)]
    pub boundary: Option<f32>,

    /// Screen columns (defaults to the terminal width).
    #[arg(long)]
    pub width: Option<u16>,

    /// Screen rows (defaults to the terminal height).
    #[arg(long)]
    pub height: Option<u16>,

    /// Hide the minimap overlay.
    #[arg(long)]
    pub no_minimap: bool,

    /// Write log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

/// Resolved engine settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub config: EngineConfig,
    /// Width given explicitly by the config file or a flag.
    pub fixed_width: Option<u16>,
    /// Height given explicitly by the config file or a flag.
    pub fixed_height: Option<u16>,
}

impl Settings {
    /// The config with any dimension not fixed explicitly taken from the
    /// terminal size.
    pub fn sized_to(&self, columns: u16, rows: u16) -> EngineConfig {
        EngineConfig {
            screen_width: self.fixed_width.unwrap_or(columns),
            screen_height: self.fixed_height.unwrap_or(rows),
            ..self.config
        }
    }
}

impl EngineArgs {
    /// Layer defaults, the config file and the flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => settings_from_file(path)?,
            None => Settings {
                config: EngineConfig::default(),
                fixed_width: None,
                fixed_height: None,
            },
        };
        self.apply_flags(&mut settings);
        settings.config.validate().context("invalid engine settings")?;
        Ok(settings)
    }

    fn apply_flags(&self, settings: &mut Settings) {
        let config = &mut settings.config;
        let overrides = [
            (&mut config.fov, self.fov),
            (&mut config.max_depth, self.max_depth),
            (&mut config.ray_step, self.ray_step),
            (&mut config.player_speed, self.player_speed),
            (&mut config.bullet_speed, self.bullet_speed),
            (&mut config.target_hit_precision, self.precision),
            (&mut config.boundary_dot_threshold, self.boundary),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(width) = self.width {
            config.screen_width = width;
            settings.fixed_width = Some(width);
        }
        if let Some(height) = self.height {
            config.screen_height = height;
            settings.fixed_height = Some(height);
        }
        if self.no_minimap {
            config.show_minimap = false;
        }
    }

    /// The built-in level, or the built-in spawn layout on the `--map` map.
    pub fn level(&self) -> Result<Level> {
        let level = Level::builtin().context("built-in level is invalid")?;
        let Some(path) = &self.map else {
            return Ok(level);
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read map {}", path.display()))?;
        let map =
            TileMap::parse(&text).with_context(|| format!("failed to parse map {}", path.display()))?;
        let level = level
            .with_map(map)
            .with_context(|| format!("map {} does not fit the spawn layout", path.display()))?;
        info!("using map {}", path.display());
        Ok(level)
    }
}

fn settings_from_file(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    settings_from_json(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

/// Parse a JSON settings document.
pub fn settings_from_json(text: &str) -> Result<Settings> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let has = |key: &str| value.get(key).is_some();
    let (width_given, height_given) = (has("screen_width"), has("screen_height"));
    let config: EngineConfig = serde_json::from_value(value)?;
    Ok(Settings {
        fixed_width: width_given.then_some(config.screen_width),
        fixed_height: height_given.then_some(config.screen_height),
        config,
    })
}
