//! Immutable board snapshot: edges, box ownership, scores and turn.
//!
//! Edge and box grids are stored flat in row-major order. Transitions never
//! mutate a snapshot that someone else holds; see `move_application.rs`.

mod move_application;

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Axis, Move, Player, PLAYERS};
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct State {
    rows: usize,
    cols: usize,
    /// `(rows + 1) x cols`
    horizontal: Vec<bool>,
    /// `rows x (cols + 1)`
    vertical: Vec<bool>,
    boxes: Vec<Option<Player>>,
    scores: [u32; 2],
    turn: Option<Player>,
}

/// Wire form of `State`, checked before it becomes a live board.
#[derive(Deserialize)]
struct StateSnapshot {
    rows: usize,
    cols: usize,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    boxes: Vec<Option<Player>>,
    scores: [u32; 2],
    turn: Option<Player>,
}

impl TryFrom<StateSnapshot> for State {
    type Error = ConfigError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        let invalid = |details: String| ConfigError::InvalidState { details };
        let StateSnapshot {
            rows,
            cols,
            horizontal,
            vertical,
            boxes,
            scores,
            turn,
        } = snapshot;

        let expected = [
            ("horizontal", horizontal.len(), (rows + 1) * cols),
            ("vertical", vertical.len(), rows * (cols + 1)),
            ("boxes", boxes.len(), rows * cols),
        ];
        for (grid, len, want) in expected {
            if len != want {
                return Err(invalid(format!(
                    "{grid} has {len} entries, a {rows}x{cols} grid needs {want}"
                )));
            }
        }

        let state = State {
            rows,
            cols,
            horizontal,
            vertical,
            boxes,
            scores,
            turn,
        };
        for (row, col) in iproduct!(0..rows, 0..cols) {
            let owned = state.box_owner(row, col).is_some();
            if owned != (state.sides_drawn(row, col) == 4) {
                return Err(invalid(format!(
                    "box ({row},{col}) ownership does not match its edges"
                )));
            }
        }
        for player in PLAYERS {
            if state.score(player) as usize != state.owned_by(player) {
                return Err(invalid(format!(
                    "{:?} scores {} but owns {} boxes",
                    player,
                    state.score(player),
                    state.owned_by(player)
                )));
            }
        }
        Ok(state)
    }
}

impl State {
    pub fn new(rows: usize, cols: usize) -> Self {
        State {
            rows,
            cols,
            horizontal: vec![false; (rows + 1) * cols],
            vertical: vec![false; rows * (cols + 1)],
            boxes: vec![None; rows * cols],
            scores: [0; 2],
            turn: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    pub(crate) fn set_turn(&mut self, turn: Option<Player>) {
        self.turn = turn;
    }

    /// Copy of this snapshot with a different side to move.
    pub fn with_turn(&self, turn: Option<Player>) -> State {
        let mut next = self.clone();
        next.turn = turn;
        next
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn total_boxes(&self) -> usize {
        self.rows * self.cols
    }

    pub fn edge_count(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    pub fn drawn_edge_count(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .filter(|&&e| e)
            .count()
    }

    pub fn in_bounds(&self, mv: Move) -> bool {
        match mv.axis {
            Axis::Horizontal => mv.row <= self.rows && mv.col < self.cols,
            Axis::Vertical => mv.row < self.rows && mv.col <= self.cols,
        }
    }

    fn edge_index(&self, mv: Move) -> Option<usize> {
        if !self.in_bounds(mv) {
            return None;
        }
        Some(match mv.axis {
            Axis::Horizontal => mv.row * self.cols + mv.col,
            Axis::Vertical => mv.row * (self.cols + 1) + mv.col,
        })
    }

    /// `None` when the edge lies outside the grid
    pub fn edge(&self, mv: Move) -> Option<bool> {
        let index = self.edge_index(mv)?;
        Some(match mv.axis {
            Axis::Horizontal => self.horizontal[index],
            Axis::Vertical => self.vertical[index],
        })
    }

    pub fn is_drawn(&self, mv: Move) -> bool {
        self.edge(mv).unwrap_or(false)
    }

    /// In range and not yet drawn
    pub fn is_legal(&self, mv: Move) -> bool {
        self.edge(mv) == Some(false)
    }

    pub fn box_owner(&self, row: usize, col: usize) -> Option<Player> {
        if row < self.rows && col < self.cols {
            self.boxes[row * self.cols + col]
        } else {
            None
        }
    }

    /// The four edges bounding box `(row, col)`: top, bottom, left, right.
    pub fn box_edges(row: usize, col: usize) -> [Move; 4] {
        [
            Move::horizontal(row, col),
            Move::horizontal(row + 1, col),
            Move::vertical(row, col),
            Move::vertical(row, col + 1),
        ]
    }

    pub fn sides_drawn(&self, row: usize, col: usize) -> u8 {
        State::box_edges(row, col)
            .iter()
            .filter(|&&edge| self.is_drawn(edge))
            .count() as u8
    }

    /// The one or two boxes bordered by an edge.
    pub fn adjacent_boxes(&self, mv: Move) -> Vec<(usize, usize)> {
        if !self.in_bounds(mv) {
            return Vec::new();
        }
        let mut adjacent = Vec::with_capacity(2);
        match mv.axis {
            Axis::Horizontal => {
                if mv.row > 0 {
                    adjacent.push((mv.row - 1, mv.col));
                }
                if mv.row < self.rows {
                    adjacent.push((mv.row, mv.col));
                }
            }
            Axis::Vertical => {
                if mv.col > 0 {
                    adjacent.push((mv.row, mv.col - 1));
                }
                if mv.col < self.cols {
                    adjacent.push((mv.row, mv.col));
                }
            }
        }
        adjacent
    }

    /// How many boxes `mv` would complete if drawn now.
    pub fn captures_for(&self, mv: Move) -> u32 {
        if !self.is_legal(mv) {
            return 0;
        }
        self.adjacent_boxes(mv)
            .into_iter()
            .filter(|&(r, c)| self.box_owner(r, c).is_none() && self.sides_drawn(r, c) == 3)
            .count() as u32
    }

    /// Every undrawn edge: horizontal edges row-major, then vertical edges
    /// row-major. Search and tie-breaking rely on this order being stable.
    pub fn legal_moves(&self) -> Vec<Move> {
        let horizontal =
            iproduct!(0..=self.rows, 0..self.cols).map(|(r, c)| Move::horizontal(r, c));
        let vertical = iproduct!(0..self.rows, 0..=self.cols).map(|(r, c)| Move::vertical(r, c));
        horizontal
            .chain(vertical)
            .filter(|&mv| self.is_legal(mv))
            .collect()
    }

    pub fn unowned_boxes(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_none()).count()
    }

    pub fn owned_by(&self, player: Player) -> usize {
        self.boxes.iter().filter(|&&b| b == Some(player)).count()
    }

    /// Unowned boxes with exactly `sides` edges drawn
    pub fn count_open_boxes_with_sides(&self, sides: u8) -> usize {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(r, c)| self.box_owner(r, c).is_none() && self.sides_drawn(r, c) == sides)
            .count()
    }

    /// All boxes owned; no legal move can remain.
    pub fn is_full(&self) -> bool {
        self.unowned_boxes() == 0
    }

    pub fn leader(&self) -> Option<Player> {
        let human = self.score(Player::Human);
        let machine = self.score(Player::Machine);
        match human.cmp(&machine) {
            std::cmp::Ordering::Greater => Some(Player::Human),
            std::cmp::Ordering::Less => Some(Player::Machine),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..=self.rows {
            for col in 0..self.cols {
                let edge = if self.is_drawn(Move::horizontal(row, col)) { "---" } else { "   " };
                write!(f, "+{}", edge)?;
            }
            writeln!(f, "+")?;
            if row == self.rows {
                break;
            }
            for col in 0..=self.cols {
                let edge = if self.is_drawn(Move::vertical(row, col)) { '|' } else { ' ' };
                write!(f, "{}", edge)?;
                if col < self.cols {
                    let owner = match self.box_owner(row, col) {
                        Some(Player::Human) => " H ",
                        Some(Player::Machine) => " M ",
                        None => "   ",
                    };
                    write!(f, "{}", owner)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
