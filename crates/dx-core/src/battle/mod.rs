//! Turn-based battle state machine.
//!
//! A battle starts `Ongoing` with a live player and a live enemy. Each
//! submitted [`BattleAction`] resolves one turn; the battle ends in victory,
//! defeat, or escape. Victory grants one loot item and an experience reward.

pub mod action;

pub use action::{BattleAction, BattleEvent};

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::character::{Character, Enemy, LevelUp, Player};
use crate::error::{GameError, GameResult};
use crate::rng::RandomSource;

/// Where a battle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleState {
    /// Waiting for the next action.
    Ongoing,
    /// The enemy was defeated.
    PlayerVictory,
    /// The player was defeated. The run is over.
    PlayerDefeated,
    /// The player got away.
    PlayerEscaped,
}

impl BattleState {
    /// Returns true for every state except `Ongoing`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl std::fmt::Display for BattleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::PlayerVictory => write!(f, "victory"),
            Self::PlayerDefeated => write!(f, "defeat"),
            Self::PlayerEscaped => write!(f, "escaped"),
        }
    }
}

/// What the player earned by winning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// The dropped item, already added to the inventory.
    pub item: String,
    /// Experience gained.
    pub experience: u32,
    /// Set if the experience caused a level-up.
    pub level_up: Option<LevelUp>,
}

/// The outcome of one battle turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleUpdate {
    /// Turn number (1-based).
    pub turn: u32,
    /// The action that was resolved.
    pub action: BattleAction,
    /// Events in the order they happened.
    pub events: Vec<BattleEvent>,
    /// The battle state after the turn.
    pub state: BattleState,
    /// Player health after the turn.
    pub player_health: u32,
    /// Enemy health after the turn.
    pub enemy_health: u32,
    /// Present only when the turn ended in victory.
    pub reward: Option<Reward>,
}

/// A battle between the player and one enemy.
///
/// The battle owns the enemy; the player is borrowed for each turn so it
/// stays owned by the session.
#[derive(Debug, Clone)]
pub struct Battle {
    enemy: Enemy,
    state: BattleState,
    turn: u32,
    escape_chance: f64,
    experience_reward: RangeInclusive<u32>,
    log: Vec<BattleEvent>,
}

impl Battle {
    /// Start a battle against `enemy`.
    pub fn new(enemy: Enemy, escape_chance: f64, experience_reward: RangeInclusive<u32>) -> Self {
        tracing::debug!(enemy = enemy.name(), health = enemy.health(), "battle started");
        Self {
            enemy,
            state: BattleState::Ongoing,
            turn: 0,
            escape_chance,
            experience_reward,
            log: Vec::new(),
        }
    }

    /// The enemy being fought.
    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Current state.
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Number of turns resolved so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every event so far.
    pub fn log(&self) -> &[BattleEvent] {
        &self.log
    }

    /// Returns true once a terminal state is reached.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Resolve one turn.
    ///
    /// Draw order: attack roll then counter roll for `Attack`; escape roll
    /// then (on failure) counter roll for `Run`; on victory, loot pick then
    /// experience roll.
    pub fn submit<R: RandomSource + ?Sized>(
        &mut self,
        player: &mut Player,
        action: BattleAction,
        rng: &mut R,
    ) -> GameResult<BattleUpdate> {
        if self.is_over() {
            return Err(GameError::BattleFinished);
        }

        self.turn += 1;
        let mut events = Vec::new();

        match action {
            BattleAction::Attack => {
                let damage = rng.roll(1, player.strength());
                self.enemy.take_damage(damage);
                events.push(BattleEvent::PlayerHit {
                    damage,
                    enemy_health: self.enemy.health(),
                });
                if self.enemy.is_alive() {
                    self.enemy_strikes(player, rng, &mut events);
                }
            }
            BattleAction::Run => {
                if rng.unit() < self.escape_chance {
                    events.push(BattleEvent::Escaped);
                    self.state = BattleState::PlayerEscaped;
                } else {
                    events.push(BattleEvent::EscapeFailed);
                    self.enemy_strikes(player, rng, &mut events);
                }
            }
        }

        let mut reward = None;
        if self.state == BattleState::Ongoing {
            if !self.enemy.is_alive() {
                self.state = BattleState::PlayerVictory;
                reward = Some(self.grant_reward(player, rng, &mut events));
            } else if !player.is_alive() {
                self.state = BattleState::PlayerDefeated;
                events.push(BattleEvent::PlayerDefeated);
            }
        }

        tracing::debug!(
            turn = self.turn,
            %action,
            player_health = player.health(),
            enemy_health = self.enemy.health(),
            state = %self.state,
            "battle turn"
        );
        if self.is_over() {
            tracing::info!(
                enemy = self.enemy.name(),
                turns = self.turn,
                outcome = %self.state,
                "battle ended"
            );
        }

        self.log.extend(events.iter().cloned());
        Ok(BattleUpdate {
            turn: self.turn,
            action,
            events,
            state: self.state,
            player_health: player.health(),
            enemy_health: self.enemy.health(),
            reward,
        })
    }

    fn enemy_strikes<R: RandomSource + ?Sized>(
        &self,
        player: &mut Player,
        rng: &mut R,
        events: &mut Vec<BattleEvent>,
    ) {
        let damage = rng.roll(1, self.enemy.strength());
        player.take_damage(damage);
        events.push(BattleEvent::EnemyHit {
            damage,
            player_health: player.health(),
        });
    }

    fn grant_reward<R: RandomSource + ?Sized>(
        &self,
        player: &mut Player,
        rng: &mut R,
        events: &mut Vec<BattleEvent>,
    ) -> Reward {
        events.push(BattleEvent::EnemyDefeated {
            enemy: self.enemy.name().to_string(),
        });

        let item = self.enemy.roll_loot(rng).to_string();
        player.add_to_inventory(item.clone());
        events.push(BattleEvent::LootFound { item: item.clone() });

        let experience = rng.roll(*self.experience_reward.start(), *self.experience_reward.end());
        let level_up = player.gain_experience(experience);
        events.push(BattleEvent::ExperienceGained { amount: experience });
        if let Some(up) = level_up {
            events.push(BattleEvent::LeveledUp { level: up.level });
        }

        Reward {
            item,
            experience,
            level_up,
        }
    }
}
