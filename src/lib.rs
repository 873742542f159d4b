// Boxes Library - Core Module Organization
//
// Rules engine and machine opponent for the box-capture game. The board
// state is immutable-by-transition, the controller owns turn order, and the
// players module holds every decision maker.

// Core game data structures and enums
pub mod config;
pub mod enums;
pub mod errors;
pub mod state;

// Game logic implementation
pub mod game;
pub mod players;

// Re-export common types for convenient access
pub use crate::config::{Difficulty, DifficultyConfig, GameConfiguration};
pub use crate::enums::{Axis, GamePhase, Move, Outcome, Player};
pub use crate::errors::{BoxesError, BoxesResult, ConfigError, GameError, GameResult};
pub use crate::game::{Game, GameSummary, MoveOutcome};
pub use crate::players::{BotPlayer, GreedyPlayer, MinimaxPlayer, RandomPlayer};
pub use crate::state::State;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
