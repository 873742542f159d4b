use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{Move, Player};

/// Top-level error type for the boxes engine
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoxesError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Reasons a move request is rejected at the controller boundary.
/// A rejected request never changes the board.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("Edge {mv} is outside a {rows}x{cols} grid")]
    EdgeOutOfBounds { mv: Move, rows: usize, cols: usize },

    #[error("Edge {mv} is already drawn")]
    EdgeAlreadyDrawn { mv: Move },

    #[error("Not player's turn: current={current:?}, attempted={attempted:?}")]
    NotPlayerTurn {
        current: Option<Player>,
        attempted: Player,
    },

    #[error("Game has not started yet")]
    GameNotStarted,

    #[error("Game has already started")]
    GameAlreadyStarted,

    #[error("Game is over")]
    GameOver,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Invalid grid {rows}x{cols}: each side must be between {min} and {max}")]
    InvalidGrid {
        rows: usize,
        cols: usize,
        min: usize,
        max: usize,
    },

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Failed to parse configuration: {details}")]
    Parse { details: String },

    #[error("Inconsistent board snapshot: {details}")]
    InvalidState { details: String },
}

pub type BoxesResult<T> = Result<T, BoxesError>;
pub type GameResult<T> = Result<T, GameError>;
pub type ConfigResult<T> = Result<T, ConfigError>;

impl GameError {
    pub fn not_player_turn(current: Option<Player>, attempted: Player) -> Self {
        Self::NotPlayerTurn { current, attempted }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            details: err.to_string(),
        }
    }
}
