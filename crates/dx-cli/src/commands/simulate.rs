use std::path::Path;

use colored::Colorize;

use dx_core::{
    BattleAction, BattleState, Character, EncounterOutcome, GameConfig, GameSession, RandomSource,
};

#[derive(Debug, Default)]
struct Tally {
    journeys: u32,
    encounters: u32,
    victories: u32,
    escapes: u32,
    turns: u32,
}

pub fn run(world: Option<&Path>, steps: u32, seed: u64, log: bool) -> Result<(), String> {
    let world = super::load_world(world)?;
    let config = GameConfig::default().with_seed(seed);
    let mut session = GameSession::new("Wanderer", world, config)
        .map_err(|e| format!("failed to start simulation: {e}"))?;

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({steps} journeys, seed={seed})").dimmed()
    );
    println!();

    let mut tally = Tally::default();

    for step in 1..=steps {
        let neighbors = session.neighbors().to_vec();
        if neighbors.is_empty() {
            println!("  {}", "Dead end: nowhere left to go.".dimmed());
            break;
        }
        let destination = &neighbors[session.rng_mut().pick(neighbors.len())];
        tally.journeys += 1;

        let outcome = session.explore(destination).map_err(|e| e.to_string())?;
        if log {
            let label = format!("[step {step:>3}]").dimmed();
            match &outcome {
                EncounterOutcome::Arrived { location } => {
                    println!("  {label} travel to {location}, all quiet");
                }
                EncounterOutcome::Encounter { location, enemy } => println!(
                    "  {label} travel to {location}, {} ({} HP) attacks!",
                    enemy.name.red(),
                    enemy.health
                ),
                EncounterOutcome::Unreachable { from, to } => {
                    println!("  {label} cannot reach {to} from {from}");
                }
            }
        }
        if matches!(outcome, EncounterOutcome::Encounter { .. }) {
            tally.encounters += 1;
        }

        while session.battle().is_some() {
            let action = BattleAction::ALL[session.rng_mut().pick(BattleAction::ALL.len())];
            let update = session.submit_action(action).map_err(|e| e.to_string())?;
            tally.turns += 1;
            if log {
                for event in &update.events {
                    println!("             {} {event}", format!("{action}:").dimmed());
                }
            }
            match update.state {
                BattleState::PlayerVictory => tally.victories += 1,
                BattleState::PlayerEscaped => tally.escapes += 1,
                BattleState::Ongoing | BattleState::PlayerDefeated => {}
            }
        }

        if session.is_over() {
            break;
        }
    }

    if log {
        println!();
    }

    let stats = session.player_stats();
    println!("  {}", "Summary".bold().underline());
    println!();
    println!("  Journeys:    {}", tally.journeys);
    println!(
        "  Encounters:  {} ({} won, {} escaped, {} battle turns)",
        tally.encounters, tally.victories, tally.escapes, tally.turns
    );
    println!("  Location:    {}", session.current_location());
    println!(
        "  {}:    level {}, {}/{} HP, strength {}, {} XP",
        session.player().name(),
        stats.level,
        stats.health,
        stats.max_health,
        stats.strength,
        stats.experience
    );
    let inventory = session.inventory();
    if inventory.is_empty() {
        println!("  Inventory:   {}", "(empty)".dimmed());
    } else {
        println!("  Inventory:   {}", inventory.join(", "));
    }
    println!();

    if session.is_over() {
        println!("  {}", "DEFEATED".red().bold());
    } else {
        println!("  {}", "SURVIVED".green().bold());
    }

    Ok(())
}
