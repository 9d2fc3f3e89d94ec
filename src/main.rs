//! Terminal raycaster runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from the term
//! crate. Each frame samples the held controls, steps the world, renders the
//! glyph grid and flushes the changed cells.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_raycaster::cli::{EngineArgs, Settings};
use tui_raycaster::core::{FrameClock, Level, World};
use tui_raycaster::engine::{FrameRenderer, ScreenGrid};
use tui_raycaster::input::{should_quit, IntentTracker};
use tui_raycaster::logging;
use tui_raycaster::term::{FrameBuffer, GridView, Rect, TerminalRenderer};
use tui_raycaster::types::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, STATUS_LINE_MAX};

/// Upper bound on the time spent waiting for input each frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(8);

#[derive(Parser, Debug)]
#[command(author, version, about = "First-person raycaster in the terminal", long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_for_terminal(cli.engine.log_file.as_deref(), cli.engine.log_level)?;

    let settings = cli.engine.settings()?;
    let level = cli.engine.level()?;

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to enter terminal mode")?;

    let result = run(&mut term, settings, level);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("shutdown");
    result
}

fn view_for(world: &World) -> GridView {
    let view = GridView::new().with_hud_rect(Rect::new(0, 0, STATUS_LINE_MAX as u16, 1));
    if !world.config().show_minimap {
        return view;
    }
    let map = world.map();
    view.with_hud_rect(Rect::new(0, 1, map.width() as u16, map.height() as u16))
}

fn run(term: &mut TerminalRenderer, settings: Settings, level: Level) -> Result<()> {
    let (columns, rows) =
        crossterm::terminal::size().unwrap_or((DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT));
    let config = settings.sized_to(columns, rows);
    config.validate().context("terminal too small")?;
    info!(
        "starting at {}x{}, fov {:.3}, depth {}",
        config.screen_width, config.screen_height, config.fov, config.max_depth
    );

    let mut world = World::new(level, config);
    let view = view_for(&world);
    let mut renderer = FrameRenderer::new(config.screen_width, config.max_depth);
    let mut grid = ScreenGrid::new(config.screen_width, config.screen_height);
    let mut fb = FrameBuffer::new(config.screen_width, config.screen_height);

    let mut tracker = IntentTracker::new();
    if term.reports_key_releases() {
        tracker = tracker.with_key_release_timeout_ms(None);
    }
    let mut clock = FrameClock::new();

    loop {
        let deadline = Instant::now() + FRAME_INTERVAL;
        while event::poll(deadline.saturating_duration_since(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    tracker.handle_key_event(key);
                }
                Event::Resize(w, h) => {
                    let sized = settings.sized_to(w, h);
                    if sized.validate().is_ok() {
                        grid.resize(sized.screen_width, sized.screen_height);
                    }
                    term.invalidate();
                }
                Event::FocusLost => tracker.reset(),
                _ => {}
            }
        }

        let dt = clock.tick();
        let intents = tracker.sample();
        tracker.update((dt * 1000.0) as u32);

        let report = world.step(&intents, dt);
        if report.targets_hit > 0 {
            info!("{} target(s) hit", report.targets_hit);
        }

        renderer.render(&world, 1.0 / dt, &mut grid);
        view.render_into(&grid, &mut fb);
        term.draw_swap(&mut fb)?;

        world.end_frame();
    }
}
