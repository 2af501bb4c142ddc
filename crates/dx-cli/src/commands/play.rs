use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use dx_core::{Character, GameConfig, GameSession};

use crate::console::Console;

pub fn run(name: &str, seed: Option<u64>, world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;
    let mut config = GameConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let session =
        GameSession::new(name, world, config).map_err(|e| format!("failed to start game: {e}"))?;
    let mut console = Console::new(session);

    println!("  {} Dungeon Explorer", "Starting".bold());
    match seed {
        Some(seed) => println!("  Seed: {seed}"),
        None => println!("  Seed: random"),
    }
    println!("{}\n", console.intro());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !console.is_finished() {
        let prompt = if console.session().battle().is_some() {
            "[a/r]> "
        } else {
            "> "
        };
        print!("{prompt}");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match console.process(&line) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{}\n", highlight(&output)),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    if console.session().is_over() {
        let stats = console.session().player_stats();
        println!(
            "  {} reached level {} with {} experience.",
            console.session().player().name(),
            stats.level,
            stats.experience
        );
    }

    Ok(())
}

/// Color the lines that matter most in a response.
fn highlight(output: &str) -> String {
    output
        .lines()
        .map(|line| {
            if line.starts_with("Game Over") {
                line.red().bold().to_string()
            } else if line.starts_with("Encountered") {
                line.red().to_string()
            } else if line.starts_with("Found:") || line.starts_with("Leveled up") {
                line.green().bold().to_string()
            } else if line.starts_with("You defeated") || line.starts_with("Successfully escaped") {
                line.green().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
