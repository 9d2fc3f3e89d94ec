//! Terminal display sink.
//!
//! Takes the glyph grid produced by the engine, styles it into a framebuffer
//! and flushes that framebuffer to a real terminal. Flushing diffs against
//! the previous frame so only changed runs are written.

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_raycaster_engine as engine;
pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{GridView, Rect};
