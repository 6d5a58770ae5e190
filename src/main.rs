//! Star Sentinel headless runner
//!
//! Drives a session with the autopilot, feeds every frame through the scene
//! builder into a counting renderer, and reports how the run went.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use star_sentinel::GameConfig;
use star_sentinel::autopilot::Autopilot;
use star_sentinel::consts::TARGET_TICK_RATE;
use star_sentinel::platform::{FixedRatePacer, FramePacer, InputSource, Unpaced};
use star_sentinel::renderer::{DrawStats, Renderer, build_scene};
use star_sentinel::sim::Session;

#[derive(Debug, Parser)]
#[command(name = "star-sentinel", about = "Run a headless Star Sentinel session")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// JSON tuning file; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pace ticks at the target rate instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// How many times the autopilot may restart after a game over
    #[arg(long, default_value_t = 0)]
    restarts: u32,
    /// Print the final render snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = GameConfig::from_json(&json)
        .with_context(|| format!("parsing config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn default_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let seed = args.seed.unwrap_or_else(default_seed);

    let mut session = Session::new(config, seed);
    let mut pilot = Autopilot::new(args.restarts);
    let mut pacer: Box<dyn FramePacer> = if args.realtime {
        Box::new(FixedRatePacer::new(TARGET_TICK_RATE))
    } else {
        Box::new(Unpaced)
    };
    let mut draws = DrawStats::default();

    let mut snapshot = session.snapshot();
    let mut ticks = 0;
    while ticks < args.ticks {
        let input = pilot.next_input(&snapshot);
        if snapshot.is_game_over() && !input.reset {
            break;
        }
        snapshot = session.tick(&input);
        draws.submit_all(&build_scene(&snapshot));
        ticks += 1;

        if ticks % u64::from(TARGET_TICK_RATE * 10) == 0 {
            log::info!(
                "t={}s score={} level={} health={} hostiles={}",
                ticks / u64::from(TARGET_TICK_RATE),
                snapshot.score,
                snapshot.level,
                snapshot.player.health,
                snapshot.hostiles.len()
            );
        }
        pacer.wait_for_next_tick();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("seed:       {seed}");
        println!("ticks:      {ticks}");
        println!("phase:      {:?}", snapshot.phase);
        println!("score:      {} (best {})", snapshot.score, snapshot.best_score.max(snapshot.score));
        println!("level:      {}", snapshot.level);
        println!("health:     {}", snapshot.player.health);
        println!(
            "combat:     {} kills, {} contacts ({} damage), {} shots",
            session.stats.kills,
            session.stats.contacts,
            session.stats.damage_taken,
            session.stats.shots_fired
        );
        println!("draw calls: {} over {} frames", draws.total(), draws.frames);
    }

    Ok(())
}
