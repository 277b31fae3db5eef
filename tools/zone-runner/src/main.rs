//! zone-runner: play a STARFALL zone headlessly and report the outcome.
//!
//! Usage:
//!   zone-runner --zone nebula-run --seed 7
//!   zone-runner --file zones/custom.json --fps 30 --json
//!   zone-runner --list

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use starfall_core::types::ZoneConfig;
use starfall_sim::{SessionConfig, SessionReport, ZoneSession};
use starfall_zones::catalog::{self, ZoneId};
use starfall_zones::load_zone;

#[derive(Debug, Parser)]
#[command(name = "zone-runner", about = "Play a STARFALL zone headlessly")]
struct Args {
    /// Built-in zone to play.
    #[arg(long, conflicts_with = "file")]
    zone: Option<ZoneId>,

    /// Zone definition JSON file to play.
    #[arg(long)]
    file: Option<PathBuf>,

    /// RNG seed. Same seed = same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Give up after this many simulated seconds.
    #[arg(long, default_value_t = 900.0)]
    max_seconds: f64,

    /// Average hits the simulated player lands per second.
    #[arg(long, default_value_t = 3.0)]
    hits_per_second: f64,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// List built-in zones and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list {
        for id in ZoneId::ALL {
            let zone = catalog::zone(id);
            println!(
                "{:<18} {} ({} waves, score {}{})",
                id.key(),
                zone.name,
                zone.wave_count,
                zone.score_to_clear,
                zone.boss_id
                    .as_deref()
                    .map(|b| format!(", boss {b}"))
                    .unwrap_or_default()
            );
        }
        return Ok(());
    }

    if args.fps.is_nan() || args.fps <= 0.0 {
        bail!("--fps must be positive, got {}", args.fps);
    }

    let zone = select_zone(&args)?;
    info!(
        "Playing '{}' with seed {} at {} fps",
        zone.name, args.seed, args.fps
    );
    let config = SessionConfig {
        seed: args.seed,
        frame_dt: 1.0 / args.fps,
        max_seconds: args.max_seconds,
        hits_per_second: args.hits_per_second,
    };

    let quiet = args.json;
    let announcer: Box<dyn FnMut(&str)> = Box::new(move |message: &str| {
        if !quiet {
            println!(">> {message}");
        }
    });

    let mut session = ZoneSession::new(zone, config, Some(announcer));
    let report = session.run();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        print_report(&report);
    }
    Ok(())
}

fn select_zone(args: &Args) -> Result<ZoneConfig> {
    match (&args.file, args.zone) {
        (Some(path), _) => {
            load_zone(path).with_context(|| format!("loading zone from {}", path.display()))
        }
        (None, Some(id)) => Ok(catalog::zone(id)),
        (None, None) => Ok(catalog::zone(ZoneId::OuterBelt)),
    }
}

fn print_report(report: &SessionReport) {
    println!();
    println!("Zone:      {}", report.zone);
    println!("Seed:      {}", report.seed);
    println!(
        "Result:    {} in {:.1}s ({} frames)",
        if report.completed { "CLEARED" } else { "TIMED OUT" },
        report.elapsed_secs,
        report.frames
    );
    println!("Waves:     {}/{}", report.waves_reached, report.total_waves);
    println!("Destroyed: {}", report.destroyed);
    println!("Escaped:   {}", report.escaped);
    println!("Spawned:");
    for (category, count) in &report.spawned {
        println!("  {:<10} {}", format!("{category:?}"), count);
    }
}
