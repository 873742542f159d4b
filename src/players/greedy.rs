use crate::enums::{Move, Player};
use crate::state::State;

/// Greedy playout: `active` keeps taking the first capturing move (in
/// canonical edge order) until none is left, then the turn goes to the
/// opponent. The returned state carries that next turn.
///
/// Every iteration completes at least one box, so at most `rows * cols`
/// iterations run. The loop is also capped explicitly and stops if a move
/// predicted to capture completes nothing.
pub fn resolve_chain(state: &State, active: Player) -> (State, Player) {
    let mut current = state.clone();
    let max_iterations = current.total_boxes();

    for _ in 0..max_iterations {
        let Some(mv) = first_capturing_move(&current) else {
            break;
        };
        let captured = current.draw_edge(mv, active);
        if captured == 0 {
            log::warn!("Chain resolution made no progress on {}; stopping", mv);
            break;
        }
    }

    let next = active.opponent();
    current.set_turn(Some(next));
    (current, next)
}

fn first_capturing_move(state: &State) -> Option<Move> {
    state
        .legal_moves()
        .into_iter()
        .find(|&mv| state.captures_for(mv) > 0)
}

/// Search transition: `turn` draws `mv`; if that captured, the rest of the
/// chain is folded into the same ply. The turn always passes to the opponent.
pub fn simulate_move_with_greedy(state: &State, mv: Move, turn: Player) -> (State, Player) {
    let (next, captured) = state.apply_move(mv, turn);
    if captured > 0 {
        resolve_chain(&next, turn)
    } else {
        let opponent = turn.opponent();
        (next.with_turn(Some(opponent)), opponent)
    }
}
