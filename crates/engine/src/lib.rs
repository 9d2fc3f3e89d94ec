//! Raycasting and depth-compositing engine.
//!
//! Pure rendering: takes a [`core::World`] and fills a [`ScreenGrid`] with
//! glyphs. No terminal I/O happens here, so every stage can be unit tested.
//!
//! Pipeline per frame:
//! - [`raycast`]: one ray per column, hit distance and edge-outline test
//! - [`raster`]: sky / wall / floor spans for each column
//! - [`sprite`]: targets and bullets, occluded through the [`DepthBuffer`]
//! - [`hud`]: minimap and status line overlays
//!
//! [`FrameRenderer`] runs the stages in order.

pub mod depth;
pub mod frame;
pub mod grid;
pub mod hud;
pub mod raster;
pub mod raycast;
pub mod sprite;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use depth::DepthBuffer;
pub use frame::FrameRenderer;
pub use grid::{Grid, GridCell, ScreenGrid};
pub use hud::{status_line, StatusLine};
pub use raster::{floor_shade, rasterize_column, ColumnSpan};
pub use raycast::{cast_column, cast_ray, is_boundary, wall_shade, RayHit};
pub use sprite::{draw_sprite, project, Projection, Sprite, SpriteKind};
