//! Battle actions and event logging.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// An action the player can take on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    /// Strike the enemy, then take its counter-attack if it survives.
    Attack,
    /// Try to escape; a failed attempt lets the enemy strike.
    Run,
}

impl BattleAction {
    /// Both actions, in menu order.
    pub const ALL: [BattleAction; 2] = [BattleAction::Attack, BattleAction::Run];
}

impl FromStr for BattleAction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "attack" => Ok(Self::Attack),
            "r" | "run" | "flee" => Ok(Self::Run),
            other => Err(GameError::InvalidAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for BattleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "Attack"),
            Self::Run => write!(f, "Run"),
        }
    }
}

/// Something that happened during a battle turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// The player hit the enemy.
    PlayerHit {
        /// Damage dealt.
        damage: u32,
        /// Enemy health afterwards.
        enemy_health: u32,
    },
    /// The enemy hit the player.
    EnemyHit {
        /// Damage dealt.
        damage: u32,
        /// Player health afterwards.
        player_health: u32,
    },
    /// The player got away.
    Escaped,
    /// The escape attempt failed.
    EscapeFailed,
    /// The enemy was defeated.
    EnemyDefeated {
        /// Enemy name.
        enemy: String,
    },
    /// The player found an item.
    LootFound {
        /// The item.
        item: String,
    },
    /// The player gained experience.
    ExperienceGained {
        /// Amount gained.
        amount: u32,
    },
    /// The player reached a new level.
    LeveledUp {
        /// The level reached.
        level: u32,
    },
    /// The player fell.
    PlayerDefeated,
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerHit {
                damage,
                enemy_health,
            } => write!(f, "You deal {damage} damage (enemy at {enemy_health} HP)"),
            Self::EnemyHit {
                damage,
                player_health,
            } => write!(f, "You take {damage} damage ({player_health} HP left)"),
            Self::Escaped => write!(f, "Successfully escaped!"),
            Self::EscapeFailed => write!(f, "Failed to escape!"),
            Self::EnemyDefeated { enemy } => write!(f, "You defeated {enemy}!"),
            Self::LootFound { item } => write!(f, "Found: {item}"),
            Self::ExperienceGained { amount } => write!(f, "Gained {amount} experience"),
            Self::LeveledUp { level } => write!(f, "Leveled up to Level {level}!"),
            Self::PlayerDefeated => write!(f, "You were defeated."),
        }
    }
}
