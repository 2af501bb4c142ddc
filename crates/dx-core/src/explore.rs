//! Travel between locations and random encounters on arrival.

use crate::character::Enemy;
use crate::rng::RandomSource;
use crate::world::WorldMap;

/// The result of a travel request.
#[derive(Debug, Clone, PartialEq)]
pub enum Exploration {
    /// The destination is not a neighbor of the current location. Nothing changed.
    Unreachable {
        /// Where the player still is.
        from: String,
        /// The rejected destination.
        to: String,
    },
    /// The player arrived and nothing happened.
    Quiet {
        /// The new location.
        location: String,
    },
    /// The player arrived and was ambushed by a freshly spawned enemy.
    Ambush {
        /// The new location.
        location: String,
        /// The enemy to fight.
        enemy: Enemy,
    },
}

/// Tracks where the player is on a [`WorldMap`].
#[derive(Debug, Clone)]
pub struct Explorer {
    world: WorldMap,
    current: String,
}

impl Explorer {
    /// Place a new explorer at the world's start location.
    pub fn new(world: WorldMap) -> Self {
        let current = world.start().to_string();
        Self { world, current }
    }

    /// The world being explored.
    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    /// The current location.
    pub fn current_location(&self) -> &str {
        &self.current
    }

    /// Places reachable from the current location.
    pub fn neighbors(&self) -> &[String] {
        self.world.neighbors(&self.current).unwrap_or_default()
    }

    /// Match free-form input against the current neighbors, ignoring case
    /// and surrounding whitespace.
    pub fn resolve_neighbor(&self, input: &str) -> Option<&str> {
        let wanted = input.trim();
        self.neighbors()
            .iter()
            .find(|n| n.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    /// Travel to `destination` and roll for an encounter.
    ///
    /// An unreachable destination changes nothing and draws no randomness.
    /// Otherwise the player moves, one value is drawn, and if it falls below
    /// `encounter_chance` and an enemy guards the destination, a fresh enemy
    /// is spawned from its template.
    pub fn explore<R: RandomSource + ?Sized>(
        &mut self,
        destination: &str,
        encounter_chance: f64,
        rng: &mut R,
    ) -> Exploration {
        if !self.world.is_neighbor(&self.current, destination) {
            tracing::debug!(from = %self.current, to = destination, "destination unreachable");
            return Exploration::Unreachable {
                from: self.current.clone(),
                to: destination.to_string(),
            };
        }

        self.current = destination.to_string();
        let roll = rng.unit();
        let template = self.world.encounter(destination);
        tracing::debug!(
            location = destination,
            roll,
            guarded = template.is_some(),
            "arrived"
        );

        match template {
            Some(template) if roll < encounter_chance => Exploration::Ambush {
                location: self.current.clone(),
                enemy: template.spawn(),
            },
            _ => Exploration::Quiet {
                location: self.current.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use crate::rng::ScriptedRandom;
    use crate::world::preset;

    fn explorer() -> Explorer {
        Explorer::new(preset::dungeon().unwrap())
    }

    #[test]
    fn starts_in_village() {
        let ex = explorer();
        assert_eq!(ex.current_location(), "Village");
        assert_eq!(ex.neighbors(), ["Forest", "Cave", "Mountain"]);
    }

    #[test]
    fn unreachable_leaves_location_unchanged() {
        let mut ex = explorer();
        let mut rng = ScriptedRandom::new([0.0]);
        let result = ex.explore("Peak", 0.6, &mut rng);
        assert_eq!(
            result,
            Exploration::Unreachable {
                from: "Village".to_string(),
                to: "Peak".to_string()
            }
        );
        assert_eq!(ex.current_location(), "Village");
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn unknown_destination_is_unreachable() {
        let mut ex = explorer();
        let mut rng = ScriptedRandom::new([0.0]);
        let result = ex.explore("Atlantis", 0.6, &mut rng);
        assert!(matches!(result, Exploration::Unreachable { .. }));
        assert_eq!(ex.current_location(), "Village");
    }

    #[test]
    fn low_roll_triggers_ambush() {
        let mut ex = explorer();
        let mut rng = ScriptedRandom::new([0.59]);
        match ex.explore("Forest", 0.6, &mut rng) {
            Exploration::Ambush { location, enemy } => {
                assert_eq!(location, "Forest");
                assert_eq!(enemy.name(), "Forest Goblin");
                assert_eq!(enemy.health(), 30);
            }
            other => panic!("expected ambush, got {other:?}"),
        }
        assert_eq!(ex.current_location(), "Forest");
    }

    #[test]
    fn roll_at_chance_is_quiet() {
        let mut ex = explorer();
        let mut rng = ScriptedRandom::new([0.6]);
        let result = ex.explore("Forest", 0.6, &mut rng);
        assert_eq!(
            result,
            Exploration::Quiet {
                location: "Forest".to_string()
            }
        );
        assert_eq!(ex.current_location(), "Forest");
    }

    #[test]
    fn unguarded_location_is_quiet_but_still_rolls() {
        let mut ex = explorer();
        let mut rng = ScriptedRandom::new([0.0]);
        ex.explore("Mountain", 0.0, &mut rng);
        let result = ex.explore("Peak", 1.0, &mut rng);
        assert!(matches!(result, Exploration::Quiet { .. }));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn resolve_neighbor_ignores_case() {
        let mut ex = explorer();
        assert_eq!(ex.resolve_neighbor("  forest "), Some("Forest"));
        assert_eq!(ex.resolve_neighbor("peak"), None);

        let mut rng = ScriptedRandom::new([0.99]);
        ex.explore("Forest", 0.6, &mut rng);
        assert_eq!(ex.resolve_neighbor("ANCIENT RUINS"), Some("Ancient Ruins"));
    }
}
