//! Dungeon level generator
//!
//! Generates one level and prints it as ASCII or JSON.

mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use dg_core::{ConfigError, DungeonGenerator, GameRng, GeneratorConfig};

/// Generate a dungeon level from a seed
#[derive(Parser, Debug)]
#[command(name = "dungeon-gen")]
#[command(author, version, about = "Generate a dungeon level", long_about = None)]
struct Args {
    /// Level index (depth), starting at 1
    #[arg(short = 'l', long = "level", default_value_t = 1)]
    level: u32,

    /// RNG seed; random if omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON generator config; missing fields keep their defaults
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Level width, overriding the config
    #[arg(long = "width")]
    width: Option<i32>,

    /// Level height, overriding the config
    #[arg(long = "height")]
    height: Option<i32>,

    /// Print the level as JSON instead of ASCII
    #[arg(long = "json")]
    json: bool,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = match args.config.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("dungeon-gen: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::debug!("generating level {} with seed {}", args.level, rng.seed());

    let mut generator = DungeonGenerator::new(config);
    let level = match generator.generate(args.level, &mut rng) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("dungeon-gen: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&level) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("dungeon-gen: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render::render_ascii(&level));
        println!("{}", render::summary(&level, rng.seed()));
    }
    ExitCode::SUCCESS
}
