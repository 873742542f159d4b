use std::f64;

use crate::enums::Player;
use crate::state::State;

use super::greedy::simulate_move_with_greedy;
use super::value::evaluate;

/// Minimax value of `state` with `turn` to move, searched `depth` plies.
/// The machine maximizes and the human minimizes; leaves are scored with
/// `evaluate(_, Machine)`. A capturing move and the chain it opens count as
/// one ply. Branching equals the number of undrawn edges, so callers keep
/// `depth` small.
pub fn search_value(state: &State, turn: Player, depth: u32) -> f64 {
    alphabeta(state, turn, depth, f64::NEG_INFINITY, f64::INFINITY)
}

/// Alpha-Beta minimax; prunes without changing the value returned.
fn alphabeta(state: &State, turn: Player, depth: u32, mut alpha: f64, mut beta: f64) -> f64 {
    if depth == 0 {
        return evaluate(state, Player::Machine);
    }
    let moves = state.legal_moves();
    if moves.is_empty() {
        return evaluate(state, Player::Machine);
    }

    if turn == Player::Machine {
        let mut best_value = f64::NEG_INFINITY;
        for mv in moves {
            let (next, next_turn) = simulate_move_with_greedy(state, mv, turn);
            let value = alphabeta(&next, next_turn, depth - 1, alpha, beta);
            best_value = best_value.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                break; // beta cut-off
            }
        }
        best_value
    } else {
        let mut best_value = f64::INFINITY;
        for mv in moves {
            let (next, next_turn) = simulate_move_with_greedy(state, mv, turn);
            let value = alphabeta(&next, next_turn, depth - 1, alpha, beta);
            best_value = best_value.min(value);
            beta = beta.min(value);
            if alpha >= beta {
                break; // alpha cut-off
            }
        }
        best_value
    }
}
