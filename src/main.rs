//! Block Breaker entry point
//!
//! Native headless mode: loads a config, plays one round with the
//! autopilot and prints the final screen.
//!
//! Example:
//!   cargo run -- --config block-breaker.json --seed 42

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use block_breaker::GameConfig;
use block_breaker::platform::{FrameLoop, LoopControl, TickTimer};
use block_breaker::renderer::{RecordingAdapter, frame_for};
use block_breaker::runner::{Autopilot, RunOutcome};
use block_breaker::sim::Session;

/// Tick budget for one headless round (about 10 minutes of play at default speed)
const MAX_TICKS: u64 = 120_000;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play one headless Block Breaker round", long_about = None)]
struct Args {
    /// JSON game configuration (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Ball spawn seed, overrides the config's seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Block Breaker (native) starting...");

    let config = match &args.config {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => {
            let config = GameConfig::default();
            config.validate()?;
            config
        }
    };
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    log::info!("Seed: {}", seed);

    let mut session = Session::new(config, seed);
    let mut adapter = RecordingAdapter::default();
    let mut frames = FrameLoop::new();
    frames.frame(&session, &mut adapter);

    session.start();
    let pilot = Autopilot::default();
    let mut timer = TickTimer::for_session(&session);
    let mut ticks = 0u64;

    // Feed the timer one tick interval per "display frame" until the round ends
    while ticks < MAX_TICKS {
        pilot.steer(&mut session);
        ticks += u64::from(timer.run(&mut session, timer.interval()));
        if frames.frame(&session, &mut adapter) == LoopControl::Stop {
            break;
        }
    }

    let outcome = RunOutcome::from_phase(session.phase);
    log::info!(
        "Finished: {:?} after {} ticks ({} frames), {} blocks left",
        outcome,
        ticks,
        frames.frames(),
        session.blocks.len()
    );

    let screen = serde_json::to_string_pretty(&frame_for(&session))?;
    println!("{screen}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_without_config() {
        let args = Args::try_parse_from(["block-breaker", "--seed", "42"]).expect("valid args");
        assert_eq!(args.seed, Some(42));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_config_and_seed_in_any_order() {
        let args = Args::try_parse_from(["block-breaker", "--seed", "7", "--config", "game.json"])
            .expect("valid args");
        assert_eq!(args.config, Some(PathBuf::from("game.json")));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_non_numeric_seed_is_rejected() {
        assert!(Args::try_parse_from(["block-breaker", "--seed", "abc"]).is_err());
    }
}
