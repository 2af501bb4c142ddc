//! The built-in dungeon map.

use super::WorldMap;
use crate::character::EnemyTemplate;
use crate::error::GameResult;

/// Name of the default start location.
pub const VILLAGE: &str = "Village";

/// The classic seven-location map starting at the Village.
pub fn dungeon() -> GameResult<WorldMap> {
    WorldMap::builder(VILLAGE)
        .location(VILLAGE, ["Forest", "Cave", "Mountain"])
        .location("Forest", [VILLAGE, "Ancient Ruins"])
        .location("Cave", [VILLAGE, "Underground Cavern"])
        .location("Mountain", [VILLAGE, "Peak"])
        .location("Ancient Ruins", ["Forest"])
        .location("Underground Cavern", ["Cave"])
        .location("Peak", ["Mountain"])
        .encounter("Forest", enemy("Forest Goblin", 30, 5, "Rusty Dagger")?)
        .encounter("Cave", enemy("Cave Troll", 50, 8, "Stone Hammer")?)
        .encounter("Mountain", enemy("Mountain Golem", 70, 12, "Enchanted Gem")?)
        .encounter(
            "Underground Cavern",
            enemy("Shadow Creature", 40, 7, "Dark Crystal")?,
        )
        .encounter(
            "Ancient Ruins",
            enemy("Ancient Guardian", 60, 10, "Mysterious Scroll")?,
        )
        .build()
}

fn enemy(name: &str, health: u32, strength: u32, loot: &str) -> GameResult<EnemyTemplate> {
    EnemyTemplate::new(name, health, strength, vec![loot.to_string()])
}
