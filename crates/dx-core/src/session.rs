//! Game session management.
//!
//! `GameSession` owns the player, the explorer, the active battle, and the
//! random source. It is the only surface a front end needs: travel with
//! [`GameSession::explore`], fight with [`GameSession::submit_action`], and
//! read snapshots of the player in between.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::battle::{Battle, BattleAction, BattleState, BattleUpdate};
use crate::character::{Character, EnemyStats, Player, PlayerStats};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::explore::{Exploration, Explorer};
use crate::rng::RandomSource;
use crate::world::WorldMap;

/// What happened after a travel request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    /// The destination is not reachable from the current location.
    Unreachable {
        /// Where the player still is.
        from: String,
        /// The rejected destination.
        to: String,
    },
    /// The player arrived safely.
    Arrived {
        /// The new location.
        location: String,
    },
    /// The player arrived and a battle began. Drive it with `submit_action`.
    Encounter {
        /// The new location.
        location: String,
        /// The enemy at full health.
        enemy: EnemyStats,
    },
}

/// One player's run through a world.
#[derive(Debug)]
pub struct GameSession<R: RandomSource = StdRng> {
    player: Player,
    explorer: Explorer,
    battle: Option<Battle>,
    config: GameConfig,
    rng: R,
    over: bool,
}

impl GameSession<StdRng> {
    /// Start a session seeded from `config.seed`, or from the OS if unset.
    pub fn new(
        player_name: impl Into<String>,
        world: WorldMap,
        config: GameConfig,
    ) -> GameResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(player_name, world, config, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session drawing from a caller-supplied random source.
    pub fn with_rng(
        player_name: impl Into<String>,
        world: WorldMap,
        config: GameConfig,
        rng: R,
    ) -> GameResult<Self> {
        config.validate()?;
        let player = Player::new(player_name, config.player_health, config.player_strength)?;
        tracing::debug!(player = player.name(), start = world.start(), "session started");
        Ok(Self {
            player,
            explorer: Explorer::new(world),
            battle: None,
            config,
            rng,
            over: false,
        })
    }

    /// Travel to a neighboring location.
    ///
    /// An unreachable destination is reported as
    /// [`EncounterOutcome::Unreachable`] and changes nothing. Fails while a
    /// battle is underway or after the player has been defeated.
    pub fn explore(&mut self, destination: &str) -> GameResult<EncounterOutcome> {
        self.ensure_alive()?;
        if self.battle.is_some() {
            return Err(GameError::BattleInProgress);
        }

        let outcome = match self.explorer.explore(
            destination,
            self.config.encounter_chance,
            &mut self.rng,
        ) {
            Exploration::Unreachable { from, to } => EncounterOutcome::Unreachable { from, to },
            Exploration::Quiet { location } => EncounterOutcome::Arrived { location },
            Exploration::Ambush { location, enemy } => {
                let stats = enemy.stats();
                self.battle = Some(Battle::new(
                    enemy,
                    self.config.escape_chance,
                    self.config.experience_reward.clone(),
                ));
                EncounterOutcome::Encounter {
                    location,
                    enemy: stats,
                }
            }
        };
        Ok(outcome)
    }

    /// Resolve one battle turn.
    ///
    /// When the turn ends the battle, it is cleared so exploration can
    /// resume. A defeat ends the session: every later call fails with
    /// [`GameError::GameOver`].
    pub fn submit_action(&mut self, action: BattleAction) -> GameResult<BattleUpdate> {
        self.ensure_alive()?;
        let battle = self.battle.as_mut().ok_or(GameError::NoActiveBattle)?;
        let update = battle.submit(&mut self.player, action, &mut self.rng)?;

        if update.state.is_terminal() {
            self.battle = None;
        }
        if update.state == BattleState::PlayerDefeated {
            tracing::info!(player = self.player.name(), "game over");
            self.over = true;
        }
        Ok(update)
    }

    /// Snapshot of the player's numbers.
    pub fn player_stats(&self) -> PlayerStats {
        self.player.stats()
    }

    /// Snapshot of the player's inventory.
    pub fn inventory(&self) -> Vec<String> {
        self.player.inventory().to_vec()
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The current location.
    pub fn current_location(&self) -> &str {
        self.explorer.current_location()
    }

    /// Places reachable from the current location.
    pub fn neighbors(&self) -> &[String] {
        self.explorer.neighbors()
    }

    /// Match free-form input against the current neighbors, ignoring case.
    pub fn resolve_neighbor(&self, input: &str) -> Option<&str> {
        self.explorer.resolve_neighbor(input)
    }

    /// The world being explored.
    pub fn world(&self) -> &WorldMap {
        self.explorer.world()
    }

    /// The battle in progress, if any.
    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Mutable access to the random source, for front ends that make their
    /// own random choices from the same sequence.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Returns true once the player has been defeated.
    pub fn is_over(&self) -> bool {
        self.over
    }

    fn ensure_alive(&self) -> GameResult<()> {
        if self.over {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;
    use crate::world::preset;

    fn scripted(values: impl IntoIterator<Item = f64>) -> GameSession<ScriptedRandom> {
        GameSession::with_rng(
            "Aria",
            preset::dungeon().unwrap(),
            GameConfig::default(),
            ScriptedRandom::new(values),
        )
        .unwrap()
    }

    #[test]
    fn new_session_defaults() {
        let s = scripted([0.0]);
        assert_eq!(s.current_location(), "Village");
        assert_eq!(s.player_stats().level, 1);
        assert_eq!(s.player_stats().health, 100);
        assert!(s.inventory().is_empty());
        assert!(s.battle().is_none());
        assert!(!s.is_over());
    }

    #[test]
    fn rejects_invalid_config() {
        let result = GameSession::new(
            "Aria",
            preset::dungeon().unwrap(),
            GameConfig::default().with_escape_chance(2.0),
        );
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn unreachable_is_not_an_error() {
        let mut s = scripted([0.0]);
        let outcome = s.explore("Peak").unwrap();
        assert_eq!(
            outcome,
            EncounterOutcome::Unreachable {
                from: "Village".to_string(),
                to: "Peak".to_string()
            }
        );
        assert_eq!(s.current_location(), "Village");
    }

    #[test]
    fn quiet_arrival() {
        let mut s = scripted([0.99]);
        let outcome = s.explore("Cave").unwrap();
        assert_eq!(
            outcome,
            EncounterOutcome::Arrived {
                location: "Cave".to_string()
            }
        );
        assert!(s.battle().is_none());
    }

    #[test]
    fn encounter_starts_battle_and_blocks_travel() {
        let mut s = scripted([0.1]);
        match s.explore("Cave").unwrap() {
            EncounterOutcome::Encounter { location, enemy } => {
                assert_eq!(location, "Cave");
                assert_eq!(enemy.name, "Cave Troll");
                assert_eq!(enemy.health, 50);
            }
            other => panic!("expected encounter, got {other:?}"),
        }
        assert!(s.battle().is_some());
        assert!(matches!(
            s.explore("Village"),
            Err(GameError::BattleInProgress)
        ));
        assert_eq!(s.current_location(), "Cave");
    }

    #[test]
    fn submit_without_battle_fails() {
        let mut s = scripted([0.0]);
        assert!(matches!(
            s.submit_action(BattleAction::Attack),
            Err(GameError::NoActiveBattle)
        ));
    }

    #[test]
    fn escape_clears_battle() {
        // Encounter roll, then escape roll.
        let mut s = scripted([0.1, 0.2]);
        s.explore("Forest").unwrap();
        let update = s.submit_action(BattleAction::Run).unwrap();
        assert_eq!(update.state, BattleState::PlayerEscaped);
        assert!(s.battle().is_none());
        assert_eq!(s.current_location(), "Forest");
        assert_eq!(s.player_stats().health, 100);
    }

    #[test]
    fn defeat_ends_session() {
        // Encounter roll 0.5 < 0.6, escape roll 0.5 fails, golem hits for 7.
        let mut s = GameSession::with_rng(
            "Frail",
            preset::dungeon().unwrap(),
            GameConfig::default().with_player(1, 1),
            ScriptedRandom::new([0.5]),
        )
        .unwrap();
        s.explore("Mountain").unwrap();
        let update = s.submit_action(BattleAction::Run).unwrap();
        assert_eq!(update.state, BattleState::PlayerDefeated);
        assert!(s.is_over());
        assert!(s.battle().is_none());
        assert!(matches!(s.explore("Village"), Err(GameError::GameOver)));
        assert!(matches!(
            s.submit_action(BattleAction::Attack),
            Err(GameError::GameOver)
        ));
        // Snapshots stay readable after the run ends.
        assert_eq!(s.player_stats().health, 0);
    }

    #[test]
    fn victory_adds_loot_and_experience() {
        // Encounter, then every roll maxes out: the goblin dies in three hits.
        let mut s = scripted([0.0, 0.999]);
        s.explore("Forest").unwrap();
        let mut last = s.submit_action(BattleAction::Attack).unwrap();
        while !last.state.is_terminal() {
            last = s.submit_action(BattleAction::Attack).unwrap();
        }
        assert_eq!(last.state, BattleState::PlayerVictory);
        assert_eq!(s.inventory(), vec!["Rusty Dagger".to_string()]);
        let xp = s.player_stats().experience;
        assert!((10..=50).contains(&xp));
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        fn run(seed: u64) -> (PlayerStats, Vec<String>, String) {
            let config = GameConfig::default().with_seed(seed);
            let mut s = GameSession::new("Aria", preset::dungeon().unwrap(), config).unwrap();
            for dest in ["Forest", "Village", "Cave", "Village", "Mountain"] {
                if s.explore(dest).is_err() {
                    break;
                }
                while s.battle().is_some() {
                    if s.submit_action(BattleAction::Attack).is_err() {
                        break;
                    }
                }
                if s.is_over() {
                    break;
                }
            }
            (s.player_stats(), s.inventory(), s.current_location().to_string())
        }
        assert_eq!(run(9), run(9));
    }
}
