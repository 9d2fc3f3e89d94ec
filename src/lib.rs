//! TUI Raycaster (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_raycaster::{core,engine,input,term,types}` and
//! holds the pieces shared by the binaries (argument parsing and logging).

pub mod cli;
pub mod logging;

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
