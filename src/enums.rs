use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human = 0,
    Machine = 1,
}

pub const PLAYERS: [Player; 2] = [Player::Human, Player::Machine];

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// Slot of this player in score arrays
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One edge of the grid. Horizontal edges live on a `(rows+1) x cols` grid,
/// vertical edges on a `rows x (cols+1)` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub axis: Axis,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn horizontal(row: usize, col: usize) -> Self {
        Move {
            axis: Axis::Horizontal,
            row,
            col,
        }
    }

    pub fn vertical(row: usize, col: usize) -> Self {
        Move {
            axis: Axis::Vertical,
            row,
            col,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            Axis::Horizontal => 'H',
            Axis::Vertical => 'V',
        };
        write!(f, "{}({},{})", axis, self.row, self.col)
    }
}

/// Finished-game result from the human player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    AwaitingFirstMove,
    InProgress,
    GameOver,
}
