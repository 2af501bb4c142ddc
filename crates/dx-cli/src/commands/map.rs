use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(world: Option<&Path>, json: bool) -> Result<(), String> {
    let world = super::load_world(world)?;

    if json {
        let out = serde_json::to_string_pretty(&world.to_spec()).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Location", "Leads to", "Guardian", "Loot"]);

    for location in world.locations() {
        let exits = if location.neighbors.is_empty() {
            "—".to_string()
        } else {
            location.neighbors.join(", ")
        };
        let (guardian, loot) = match world.encounter(&location.name) {
            Some(enemy) => (
                format!(
                    "{} ({} HP, str {})",
                    enemy.name(),
                    enemy.max_health(),
                    enemy.strength()
                ),
                enemy.loot().join(", "),
            ),
            None => ("—".to_string(), "—".to_string()),
        };
        let name = if location.name == world.start() {
            format!("{} (start)", location.name)
        } else {
            location.name.clone()
        };
        table.add_row(vec![name, exits, guardian, loot]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} locations, {} guarded",
        world.location_count(),
        world.encounter_count()
    );

    Ok(())
}
