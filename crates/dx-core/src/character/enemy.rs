//! Enemy templates and the fresh enemies spawned from them.

use serde::{Deserialize, Serialize};

use super::{Character, CharacterCore, Health};
use crate::error::{GameError, GameResult};
use crate::rng::RandomSource;

/// An immutable enemy prototype bound to a location.
///
/// Every encounter spawns a new [`Enemy`] from the template, so damage dealt
/// in one fight never carries over to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyTemplate {
    name: String,
    max_health: u32,
    strength: u32,
    loot: Vec<String>,
}

impl EnemyTemplate {
    /// Create a template. Fails on zero health, zero strength, or empty loot.
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        strength: u32,
        loot: Vec<String>,
    ) -> GameResult<Self> {
        let name = name.into();
        // Validates health and strength with the same rules as any character.
        CharacterCore::new(name.as_str(), max_health, strength)?;
        if loot.is_empty() {
            return Err(GameError::InvalidCharacter(format!(
                "{name} needs at least one loot item"
            )));
        }
        Ok(Self {
            name,
            max_health,
            strength,
            loot,
        })
    }

    /// Enemy name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starting (and maximum) health of spawned enemies.
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Damage roll upper bound.
    pub fn strength(&self) -> u32 {
        self.strength
    }

    /// Possible drops.
    pub fn loot(&self) -> &[String] {
        &self.loot
    }

    /// Instantiate a fresh enemy at full health.
    pub fn spawn(&self) -> Enemy {
        Enemy {
            core: CharacterCore {
                name: self.name.clone(),
                health: Health::full(self.max_health),
                strength: self.strength,
                inventory: Vec::new(),
            },
            loot: self.loot.clone(),
        }
    }
}

/// A live enemy in a single encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    core: CharacterCore,
    loot: Vec<String>,
}

impl Enemy {
    /// Possible drops.
    pub fn loot(&self) -> &[String] {
        &self.loot
    }

    /// Pick one drop uniformly at random.
    pub fn roll_loot<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.pick(self.loot.len());
        // Templates guarantee loot is non-empty; fall back to the name for
        // enemies built any other way.
        self.loot.get(index).map_or(self.core.name.as_str(), String::as_str)
    }

    /// Snapshot of the enemy's numbers.
    pub fn stats(&self) -> EnemyStats {
        EnemyStats {
            name: self.core.name.clone(),
            health: self.health(),
            max_health: self.max_health(),
            strength: self.strength(),
        }
    }
}

impl Character for Enemy {
    fn core(&self) -> &CharacterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut CharacterCore {
        &mut self.core
    }
}

/// Read-only snapshot of an enemy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    /// Enemy name.
    pub name: String,
    /// Current hit points.
    pub health: u32,
    /// Maximum hit points.
    pub max_health: u32,
    /// Damage roll upper bound.
    pub strength: u32,
}
