//! Inspect Motio data files.
//!
//! Loads every file independently, prints a one-line summary per file and
//! exits non-zero if any of them failed.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin motio-inspect -- curve.txt sim.txt field.txt
//! cargo run --bin motio-inspect -- --frames --frame-duration 0.5 sim.txt
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use motio::format::{load_batch, DataFile};
use motio::playback::{PlaybackConfig, Timeline, DEFAULT_FRAME_DURATION};
use motio::summary::describe;

/// Summarize curve, particle simulation and vector field files
#[derive(Parser, Debug)]
#[command(name = "motio-inspect")]
#[command(about = "Summarize curve, particle simulation and vector field files")]
struct Args {
    /// Files to load
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Simulated time per animation frame
    #[arg(long, default_value_t = DEFAULT_FRAME_DURATION)]
    frame_duration: f64,

    /// Print every frame of each simulation
    #[arg(long)]
    frames: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_frames(timeline: &Timeline<'_>) {
    for frame in timeline.frames() {
        if let Some(label) = timeline.step_label(frame.index) {
            println!("  {}", label.replace('\n', "  "));
        }
        for (ball, p) in &frame.balls {
            println!("    {} ({}) at ({}, {})", ball.name(), ball.color(), p.x, p.y);
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = PlaybackConfig {
        frame_duration: args.frame_duration,
    };
    config.validate()?;

    info!(files = args.files.len(), "loading");
    let outcomes = load_batch(&args.files);

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(file) => {
                println!("{}: {}", outcome.path.display(), describe(file, &config));
                if let DataFile::Simulation(sim) = file {
                    if args.frames {
                        print_frames(&Timeline::with_config(sim, &config)?);
                    }
                }
            }
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} file(s) failed to load", outcomes.len());
    }
    Ok(())
}
