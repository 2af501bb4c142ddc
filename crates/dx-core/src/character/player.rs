//! The player character: experience, levels, and stat snapshots.

use serde::{Deserialize, Serialize};

use super::{Character, CharacterCore};
use crate::error::GameResult;

/// Experience needed per level before the next level-up.
pub const XP_PER_LEVEL: u32 = 100;
/// Max health gained on each level-up.
pub const HEALTH_PER_LEVEL: u32 = 20;
/// Strength gained on each level-up.
pub const STRENGTH_PER_LEVEL: u32 = 5;

/// A notification that the player just gained a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// The level reached.
    pub level: u32,
    /// Max health after the level-up.
    pub max_health: u32,
    /// Strength after the level-up.
    pub strength: u32,
}

/// Read-only snapshot of the player's numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Current level (starts at 1).
    pub level: u32,
    /// Current hit points.
    pub health: u32,
    /// Maximum hit points.
    pub max_health: u32,
    /// Damage roll upper bound.
    pub strength: u32,
    /// Total experience gained.
    pub experience: u32,
}

/// The player's character.
///
/// Built only through [`Player::new`], so it never skips the stat checks.
///
/// ```compile_fail
/// let player: dx_core::Player = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    core: CharacterCore,
    experience: u32,
    level: u32,
}

impl Player {
    /// Create a level 1 player with no experience.
    pub fn new(name: impl Into<String>, max_health: u32, strength: u32) -> GameResult<Self> {
        Ok(Self {
            core: CharacterCore::new(name, max_health, strength)?,
            experience: 0,
            level: 1,
        })
    }

    /// Total experience gained so far.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience at which the next level-up triggers.
    pub fn next_level_at(&self) -> u32 {
        XP_PER_LEVEL.saturating_mul(self.level)
    }

    /// Add experience, then level up once if the threshold is reached.
    ///
    /// The threshold is checked a single time per gain, so a gain large
    /// enough for two levels still only grants one; the next gain will
    /// trigger the following level.
    pub fn gain_experience(&mut self, xp: u32) -> Option<LevelUp> {
        self.experience = self.experience.saturating_add(xp);
        if self.experience >= self.next_level_at() {
            Some(self.level_up())
        } else {
            None
        }
    }

    fn level_up(&mut self) -> LevelUp {
        self.level += 1;
        self.core.health.grow_and_refill(HEALTH_PER_LEVEL);
        self.core.strength = self.core.strength.saturating_add(STRENGTH_PER_LEVEL);
        tracing::info!(
            player = %self.core.name,
            level = self.level,
            max_health = self.core.health.max(),
            strength = self.core.strength,
            "level up"
        );
        LevelUp {
            level: self.level,
            max_health: self.core.health.max(),
            strength: self.core.strength,
        }
    }

    /// Snapshot the player's numbers.
    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            level: self.level,
            health: self.health(),
            max_health: self.max_health(),
            strength: self.strength(),
            experience: self.experience,
        }
    }
}

impl Character for Player {
    fn core(&self) -> &CharacterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut CharacterCore {
        &mut self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Player {
        Player::new("Aria", 100, 10).unwrap()
    }

    #[test]
    fn new_player_defaults() {
        let p = hero();
        assert_eq!(p.level(), 1);
        assert_eq!(p.experience(), 0);
        assert_eq!(p.health(), 100);
        assert_eq!(p.strength(), 10);
        assert!(p.inventory().is_empty());
    }

    #[test]
    fn below_threshold_no_level() {
        let mut p = hero();
        assert_eq!(p.gain_experience(99), None);
        assert_eq!(p.level(), 1);
        assert_eq!(p.experience(), 99);
    }

    #[test]
    fn threshold_triggers_level_up() {
        let mut p = hero();
        p.gain_experience(99);
        p.take_damage(70);

        let up = p.gain_experience(1).unwrap();
        assert_eq!(
            up,
            LevelUp {
                level: 2,
                max_health: 120,
                strength: 15
            }
        );
        assert_eq!(p.level(), 2);
        assert_eq!(p.health(), 120);
        assert_eq!(p.max_health(), 120);
        assert_eq!(p.strength(), 15);
    }

    #[test]
    fn threshold_scales_with_level() {
        let mut p = hero();
        p.gain_experience(100);
        assert_eq!(p.level(), 2);

        // Level 2 needs 200 total.
        p.gain_experience(99);
        assert_eq!(p.experience(), 199);
        assert_eq!(p.level(), 2);

        let up = p.gain_experience(1).unwrap();
        assert_eq!(up.level, 3);
        assert_eq!(p.max_health(), 140);
        assert_eq!(p.strength(), 20);
        assert_eq!(p.health(), 140);
    }

    #[test]
    fn large_gain_levels_once() {
        let mut p = hero();
        let up = p.gain_experience(350).unwrap();
        assert_eq!(up.level, 2);
        assert_eq!(p.level(), 2);

        // Still above the level 2 threshold, so the next gain levels again.
        let up = p.gain_experience(0).unwrap();
        assert_eq!(up.level, 3);
    }

    #[test]
    fn new_rejects_zero_stats() {
        assert!(Player::new("Ghost", 0, 10).is_err());
        assert!(Player::new("Pacifist", 100, 0).is_err());
    }

    #[test]
    fn stats_snapshot() {
        let mut p = hero();
        p.take_damage(25);
        p.gain_experience(40);
        assert_eq!(
            p.stats(),
            PlayerStats {
                level: 1,
                health: 75,
                max_health: 100,
                strength: 10,
                experience: 40,
            }
        );
    }

    #[test]
    fn stats_serialize() {
        let json = serde_json::to_string(&hero().stats()).unwrap();
        assert!(json.contains("\"level\":1"));
        assert!(json.contains("\"experience\":0"));
    }
}
