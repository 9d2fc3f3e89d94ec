//! Headless frame dump.
//!
//! Simulates a fixed number of frames with scripted controls, then prints the
//! last rendered frame to stdout as plain text. Script letters, one per
//! frame: `w` forward, `s` back, `a` left, `d` right, `f` fire, `.` nothing.
//! Frames past the end of the script get no input.

use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, info};

use tui_raycaster::cli::EngineArgs;
use tui_raycaster::core::{clamp_elapsed, World};
use tui_raycaster::engine::{FrameRenderer, ScreenGrid};
use tui_raycaster::logging;
use tui_raycaster::types::{Control, Intents};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render raycaster frames without a terminal", long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Per-frame control letters.
    #[arg(long, default_value = "")]
    script: String,

    /// Seconds per simulated frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
}

fn parse_script(script: &str) -> Result<Vec<Intents>> {
    script
        .chars()
        .enumerate()
        .map(|(i, ch)| match (ch, Control::from_script(ch)) {
            ('.', _) => Ok(Intents::none()),
            (_, Some(control)) => Ok(Intents::none().with(control)),
            (_, None) => bail!("unknown script letter {ch:?} at frame {i}"),
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr(cli.engine.log_level)?;

    let script = parse_script(&cli.script)?;
    let config = cli.engine.settings()?.config;
    let mut world = World::new(cli.engine.level()?, config);
    let mut renderer = FrameRenderer::new(config.screen_width, config.max_depth);
    let mut grid = ScreenGrid::new(config.screen_width, config.screen_height);
    let dt = clamp_elapsed(cli.dt);

    info!("simulating {} frames at dt {:.4}", cli.frames, dt);
    for frame in 0..cli.frames {
        let intents = script.get(frame as usize).copied().unwrap_or_default();
        let report = world.step(&intents, dt);
        debug!("frame {frame}: {report:?}");
        renderer.render(&world, 1.0 / dt, &mut grid);
        world.end_frame();
    }
    info!(
        "final pose {:?}, {} projectiles, {} targets left",
        world.pose(),
        world.projectiles().len(),
        world.targets().alive_count()
    );

    println!("{grid}");
    Ok(())
}
