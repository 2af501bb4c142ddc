//! Error types for the simulation.

/// Errors that can occur while building or playing a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A location referenced by the world or a caller does not exist.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The world graph violates one of its construction invariants.
    #[error("invalid world: {0}")]
    InvalidWorld(String),

    /// A character or enemy template has impossible stats.
    #[error("invalid character: {0}")]
    InvalidCharacter(String),

    /// A game configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A battle action other than attack or run was submitted.
    #[error("invalid battle action: {0} (expected attack or run)")]
    InvalidAction(String),

    /// Exploration was attempted while a battle is still being fought.
    #[error("a battle is in progress")]
    BattleInProgress,

    /// A battle action was submitted with no battle underway.
    #[error("no active battle")]
    NoActiveBattle,

    /// A battle action was submitted after the battle reached a terminal state.
    #[error("the battle is already over")]
    BattleFinished,

    /// The player has been defeated; the run is over.
    #[error("game over")]
    GameOver,

    /// A world document could not be parsed.
    #[error("world format error: {0}")]
    WorldFormat(#[from] serde_json::Error),
}

/// Convenience result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
