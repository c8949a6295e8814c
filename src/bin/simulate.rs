//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 10 one-hour sessions
//!   cargo run --bin simulate -- --preset idle        # no clicking
//!   cargo run --bin simulate -- --prestige 3 -d 21600 --seed 42

use beer_clicker::simulator::{run_simulation, SimConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// 10 one-hour sessions, 5 clicks/s, greedy buying
    Default,
    /// No clicks and no random events
    Idle,
    /// 10 clicks/s
    Active,
    /// Six-hour sessions that prestige
    Prestige,
}

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Headless balance simulator for the beer clicker engine")]
struct Args {
    /// Starting configuration; other flags override it
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,

    /// Number of simulated sessions
    #[arg(short = 'n', long)]
    runs: Option<u32>,

    /// Session length in seconds
    #[arg(short = 'd', long)]
    duration: Option<u64>,

    /// Manual clicks per second
    #[arg(short = 'c', long)]
    clicks: Option<u32>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Prestige up to this level
    #[arg(long)]
    prestige: Option<u32>,

    /// Disable greedy buying
    #[arg(long)]
    no_buy: bool,

    /// Disable golden bonuses and festivals
    #[arg(long)]
    no_events: bool,

    /// Print one line per run
    #[arg(short, long)]
    verbose: bool,

    /// Write the JSON report to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> (SimConfig, Option<PathBuf>) {
        let mut config = match self.preset {
            Preset::Default => SimConfig::default(),
            Preset::Idle => SimConfig::idle_only(),
            Preset::Active => SimConfig::active_player(),
            Preset::Prestige => SimConfig::prestige_cycle(self.prestige.unwrap_or(1)),
        };
        if let Some(runs) = self.runs {
            config.num_runs = runs;
        }
        if let Some(duration) = self.duration {
            config.duration_seconds = duration;
        }
        if let Some(clicks) = self.clicks {
            config.clicks_per_second = clicks;
        }
        if let Some(level) = self.prestige {
            config.simulate_prestige = true;
            config.target_prestige = level;
        }
        config.seed = self.seed;
        config.auto_buy &= !self.no_buy;
        if self.no_events {
            config.simulate_events = false;
        }
        if self.verbose {
            config.verbosity = 2;
        }
        (config, self.json)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let (config, json_path) = Args::parse().into_config();

    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Duration:       {}s", config.duration_seconds);
    println!("  Clicks/s:       {}", config.clicks_per_second);
    println!("  Auto-buy:       {}", config.auto_buy);
    println!("  Events:         {}", config.simulate_events);
    if config.simulate_prestige {
        println!("  Prestige:       up to P{}", config.target_prestige);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if let Some(path) = json_path {
        if let Err(e) = std::fs::write(&path, report.to_json()) {
            eprintln!("failed to write {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", path.display());
    }
    ExitCode::SUCCESS
}
