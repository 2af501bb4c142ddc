//! Text command interpreter on top of a game session.
//!
//! Turns lines like `go forest` or `attack` into session calls and renders
//! the results as plain text. Coloring is left to the caller.

use dx_core::{
    BattleAction, BattleState, BattleUpdate, Character, EncounterOutcome, GameError, GameResult,
    GameSession, RandomSource,
};

/// An interactive game driven by text commands.
pub struct Console<R: RandomSource> {
    session: GameSession<R>,
    quit: bool,
}

impl<R: RandomSource> Console<R> {
    /// Wrap a session.
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            session,
            quit: false,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// True once the player quit or was defeated.
    pub fn is_finished(&self) -> bool {
        self.quit || self.session.is_over()
    }

    /// Opening text: where the player stands and what to type.
    pub fn intro(&self) -> String {
        format!(
            "Welcome to Dungeon Explorer, {}!\n{}\nType 'help' for commands.",
            self.session.player().name(),
            self.describe_location()
        )
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "help" | "h" | "?" => Ok(self.help()),
            "look" | "l" => Ok(self.describe_location()),
            "stats" => Ok(self.stats()),
            "inventory" | "inv" | "i" => Ok(self.inventory()),
            "quit" | "q" | "exit" => {
                self.quit = true;
                Ok("Thanks for playing!".to_string())
            }
            "go" | "explore" | "travel" => self.travel(rest),
            _ if self.session.battle().is_some() => {
                let action: BattleAction = trimmed.parse()?;
                self.fight(action)
            }
            "attack" | "a" | "run" | "r" => Err(GameError::NoActiveBattle),
            // A bare place name is shorthand for `go <place>`.
            _ if self.session.resolve_neighbor(trimmed).is_some() => self.travel(trimmed),
            _ => Ok(format!("Unknown command '{cmd}'. Type 'help' for commands.")),
        }
    }

    fn travel(&mut self, input: &str) -> GameResult<String> {
        if input.is_empty() {
            return Ok(format!(
                "Where to? Possible destinations: {}",
                self.session.neighbors().join(", ")
            ));
        }
        let destination = self
            .session
            .resolve_neighbor(input)
            .map_or_else(|| input.to_string(), str::to_string);

        let outcome = self.session.explore(&destination)?;
        Ok(match outcome {
            EncounterOutcome::Unreachable { from, to } => {
                format!("You cannot travel to {to} from {from}.")
            }
            EncounterOutcome::Arrived { location } => {
                format!("Traveling to {location}...\n{}", self.describe_location())
            }
            EncounterOutcome::Encounter { location, enemy } => format!(
                "Traveling to {location}...\nEncountered {} ({} HP)!\nDo you want to (a)ttack or (r)un?",
                enemy.name, enemy.health
            ),
        })
    }

    fn fight(&mut self, action: BattleAction) -> GameResult<String> {
        let enemy_name = self
            .session
            .battle()
            .map(|b| b.enemy().name().to_string())
            .unwrap_or_default();
        let update = self.session.submit_action(action)?;
        Ok(self.render_update(&enemy_name, &update))
    }

    fn render_update(&self, enemy_name: &str, update: &BattleUpdate) -> String {
        let mut lines: Vec<String> = update.events.iter().map(ToString::to_string).collect();
        match update.state {
            BattleState::Ongoing => lines.push(format!(
                "{}: {} HP | {enemy_name}: {} HP",
                self.session.player().name(),
                update.player_health,
                update.enemy_health
            )),
            BattleState::PlayerDefeated => lines.push("Game Over!".to_string()),
            BattleState::PlayerVictory | BattleState::PlayerEscaped => {
                lines.push(self.describe_location());
            }
        }
        lines.join("\n")
    }

    fn describe_location(&self) -> String {
        let neighbors = self.session.neighbors();
        let exits = if neighbors.is_empty() {
            "none".to_string()
        } else {
            neighbors.join(", ")
        };
        format!(
            "You are in {}. Possible destinations: {exits}",
            self.session.current_location()
        )
    }

    fn stats(&self) -> String {
        let s = self.session.player_stats();
        format!(
            "{}'s Stats:\nLevel: {}\nHealth: {}/{}\nStrength: {}\nExperience: {}",
            self.session.player().name(),
            s.level,
            s.health,
            s.max_health,
            s.strength,
            s.experience
        )
    }

    fn inventory(&self) -> String {
        let items = self.session.inventory();
        if items.is_empty() {
            return "Inventory: empty".to_string();
        }
        let mut out = String::from("Inventory:");
        for item in items {
            out.push_str("\n  - ");
            out.push_str(&item);
        }
        out
    }

    fn help(&self) -> String {
        [
            "Commands:",
            "  go <place>    travel to a neighboring location (or just type its name)",
            "  look          show where you are and where you can go",
            "  stats         show your level, health, strength and experience",
            "  inventory     list the items you carry",
            "  quit          leave the game",
            "In battle:",
            "  attack (a)    strike the enemy",
            "  run (r)       try to escape",
        ]
        .join("\n")
    }
}
