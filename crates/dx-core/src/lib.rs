//! Exploration and combat simulation for Dungeon Explorer.
//!
//! A player walks a fixed graph of locations. Arriving somewhere may trigger
//! an encounter with the enemy bound to that location, which is resolved as
//! a turn-based battle that mutates health, inventory, and experience.
//! All randomness flows through an injectable [`RandomSource`] so every run
//! can be replayed deterministically.

pub mod battle;
pub mod character;
pub mod config;
pub mod error;
pub mod explore;
pub mod rng;
pub mod session;
pub mod world;

pub use battle::{Battle, BattleAction, BattleEvent, BattleState, BattleUpdate, Reward};
pub use character::{
    Character, CharacterCore, Enemy, EnemyStats, EnemyTemplate, Health, LevelUp, Player,
    PlayerStats,
};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use explore::{Exploration, Explorer};
pub use rng::{RandomSource, ScriptedRandom};
pub use session::{EncounterOutcome, GameSession};
pub use world::{WorldMap, WorldSpec};
