use crate::enums::Player;
use crate::state::State;

#[derive(Debug, Clone)]
pub struct ValueWeights {
    pub box_difference: f64,
    /// Subtracted per unowned box standing at three sides
    pub danger: f64,
}

impl Default for ValueWeights {
    fn default() -> Self {
        Self {
            box_difference: 10.0,
            danger: 1.0,
        }
    }
}

/// Heuristic value of `state` for `perspective` with the default weights:
/// `(mine - theirs) * 10 - danger`, where danger counts every unowned box on
/// the board with exactly three sides drawn.
pub fn evaluate(state: &State, perspective: Player) -> f64 {
    evaluate_with(state, perspective, &ValueWeights::default())
}

pub fn evaluate_with(state: &State, perspective: Player, weights: &ValueWeights) -> f64 {
    let mine = state.score(perspective) as f64;
    let theirs = state.score(perspective.opponent()) as f64;
    let danger = state.count_open_boxes_with_sides(3) as f64;
    (mine - theirs) * weights.box_difference - danger * weights.danger
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Move;

    #[test]
    fn test_empty_board_is_even() {
        let state = State::new(3, 3);
        assert_eq!(evaluate(&state, Player::Machine), 0.0);
        assert_eq!(evaluate(&state, Player::Human), 0.0);
    }

    #[test]
    fn test_box_difference_and_danger() {
        let mut state = State::new(2, 2);
        // machine takes (0,0)
        for mv in State::box_edges(0, 0) {
            state = state.apply_move(mv, Player::Machine).0;
        }
        // (0,1) left at three sides: top, right, and the shared left edge
        state = state.apply_move(Move::horizontal(0, 1), Player::Human).0;
        state = state.apply_move(Move::vertical(0, 2), Player::Human).0;
        assert_eq!(state.count_open_boxes_with_sides(3), 1);

        assert_eq!(evaluate(&state, Player::Machine), 10.0 - 1.0);
        assert_eq!(evaluate(&state, Player::Human), -10.0 - 1.0);
    }

    #[test]
    fn test_custom_weights() {
        let mut state = State::new(1, 1);
        for mv in State::box_edges(0, 0) {
            state = state.apply_move(mv, Player::Human).0;
        }
        let weights = ValueWeights {
            box_difference: 3.0,
            danger: 0.0,
        };
        assert_eq!(evaluate_with(&state, Player::Human, &weights), 3.0);
    }
}
