//! CLI frontend for the Dungeon Explorer adventure.

mod commands;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "dx",
    about = "Dungeon Explorer: roam the wilds, fight monsters, collect loot",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log simulation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive adventure
    Play {
        /// Your character's name
        #[arg(short, long, default_value = "Adventurer")]
        name: String,

        /// RNG seed for a reproducible run (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON world file (default: the built-in dungeon)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Show every location, where it leads, and what guards it
    Map {
        /// Print the world as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// JSON world file (default: the built-in dungeon)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Let a random wanderer explore and report how it fared
    Simulate {
        /// Number of journeys to attempt
        #[arg(short = 'n', long, default_value = "20")]
        steps: u32,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON world file (default: the built-in dungeon)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Print every journey and battle turn
        #[arg(short = 'l', long)]
        log: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "dx_core=debug,dx=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play { name, seed, world } => commands::play::run(&name, seed, world.as_deref()),
        Commands::Map { json, world } => commands::map::run(world.as_deref(), json),
        Commands::Simulate {
            steps,
            seed,
            world,
            log,
        } => commands::simulate::run(world.as_deref(), steps, seed, log),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
