//! Tunable game rules.

use std::ops::RangeInclusive;

use crate::error::{GameError, GameResult};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Chance that arriving at a guarded location starts a battle.
    pub encounter_chance: f64,
    /// Chance that running away succeeds.
    pub escape_chance: f64,
    /// Experience granted for a victory, drawn uniformly from this range.
    pub experience_reward: RangeInclusive<u32>,
    /// Starting health of a new player.
    pub player_health: u32,
    /// Starting strength of a new player.
    pub player_strength: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            encounter_chance: 0.6,
            escape_chance: 0.5,
            experience_reward: 10..=50,
            player_health: 100,
            player_strength: 10,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the encounter chance (0.0 to 1.0).
    pub fn with_encounter_chance(mut self, chance: f64) -> Self {
        self.encounter_chance = chance;
        self
    }

    /// Set the escape chance (0.0 to 1.0).
    pub fn with_escape_chance(mut self, chance: f64) -> Self {
        self.escape_chance = chance;
        self
    }

    /// Set the experience reward range.
    pub fn with_experience_reward(mut self, reward: RangeInclusive<u32>) -> Self {
        self.experience_reward = reward;
        self
    }

    /// Set the player's starting health and strength.
    pub fn with_player(mut self, health: u32, strength: u32) -> Self {
        self.player_health = health;
        self.player_strength = strength;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> GameResult<()> {
        for (label, chance) in [
            ("encounter chance", self.encounter_chance),
            ("escape chance", self.escape_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(GameError::InvalidConfig(format!(
                    "{label} must be between 0 and 1, got {chance}"
                )));
            }
        }
        if self.experience_reward.is_empty() {
            return Err(GameError::InvalidConfig(format!(
                "experience reward range {}..={} is empty",
                self.experience_reward.start(),
                self.experience_reward.end()
            )));
        }
        if self.player_health == 0 || self.player_strength == 0 {
            return Err(GameError::InvalidConfig(
                "player health and strength must be above 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, None);
        assert!((cfg.encounter_chance - 0.6).abs() < f64::EPSILON);
        assert!((cfg.escape_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.experience_reward, 10..=50);
        assert_eq!(cfg.player_health, 100);
        assert_eq!(cfg.player_strength, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_encounter_chance(1.0)
            .with_escape_chance(0.0)
            .with_experience_reward(5..=5)
            .with_player(50, 3);
        assert_eq!(cfg.seed, Some(7));
        assert!((cfg.encounter_chance - 1.0).abs() < f64::EPSILON);
        assert!(cfg.escape_chance.abs() < f64::EPSILON);
        assert_eq!(cfg.experience_reward, 5..=5);
        assert_eq!(cfg.player_health, 50);
        assert_eq!(cfg.player_strength, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_chances() {
        assert!(GameConfig::default().with_encounter_chance(1.5).validate().is_err());
        assert!(GameConfig::default().with_escape_chance(-0.1).validate().is_err());
        assert!(GameConfig::default().with_escape_chance(f64::NAN).validate().is_err());
    }

    #[test]
    fn rejects_empty_reward_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let cfg = GameConfig::default().with_experience_reward(50..=10);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_player_stats() {
        assert!(GameConfig::default().with_player(0, 10).validate().is_err());
        assert!(GameConfig::default().with_player(100, 0).validate().is_err());
    }
}
