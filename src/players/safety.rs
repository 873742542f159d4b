use crate::enums::{Move, Player};
use crate::state::State;

/// Whether drawing `mv` leaves none of its neighbouring boxes one edge short
/// of completion. The move is simulated for the side to move (the machine
/// when no turn is set); completing a box yourself counts as safe.
pub fn is_safe(state: &State, mv: Move) -> bool {
    let mover = state.turn().unwrap_or(Player::Machine);
    let (next, _) = state.apply_move(mv, mover);
    next.adjacent_boxes(mv)
        .into_iter()
        .all(|(row, col)| next.box_owner(row, col).is_some() || next.sides_drawn(row, col) != 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(state: &State, moves: &[Move]) -> State {
        moves
            .iter()
            .fold(state.clone(), |s, &mv| s.apply_move(mv, Player::Human).0)
    }

    #[test]
    fn test_first_edge_is_safe() {
        let state = State::new(3, 3);
        assert!(state.legal_moves().into_iter().all(|mv| is_safe(&state, mv)));
    }

    #[test]
    fn test_third_side_is_unsafe() {
        let state = draw(&State::new(2, 2), &[Move::horizontal(0, 0), Move::vertical(0, 0)]);
        // bottom edge of (0,0) also touches (1,0), which stays at one side
        assert!(!is_safe(&state, Move::horizontal(1, 0)));
        assert!(!is_safe(&state, Move::vertical(0, 1)));
        assert!(is_safe(&state, Move::horizontal(2, 1)));
    }

    #[test]
    fn test_completing_box_is_safe() {
        let state = draw(
            &State::new(2, 2),
            &[Move::horizontal(0, 0), Move::horizontal(1, 0), Move::vertical(0, 0)],
        );
        assert!(is_safe(&state, Move::vertical(0, 1)));
    }

    #[test]
    fn test_completing_box_but_opening_neighbour_is_unsafe() {
        // (0,0) at three sides; (0,1) at two sides sharing the closing edge
        let state = draw(
            &State::new(1, 2),
            &[
                Move::horizontal(0, 0),
                Move::horizontal(1, 0),
                Move::vertical(0, 0),
                Move::horizontal(0, 1),
                Move::horizontal(1, 1),
            ],
        );
        assert_eq!(state.captures_for(Move::vertical(0, 1)), 1);
        assert!(!is_safe(&state, Move::vertical(0, 1)));
    }

    #[test]
    fn test_two_by_two_scenario() {
        // three sides of (0,0): top, left, bottom
        let state = draw(
            &State::new(2, 2),
            &[Move::horizontal(0, 0), Move::vertical(0, 0), Move::horizontal(1, 0)],
        );
        assert_eq!(state.sides_drawn(0, 0), 3);
        assert_eq!(state.sides_drawn(1, 0), 1);

        // (1,0) goes from one to two sides: safe
        assert!(is_safe(&state, Move::vertical(1, 0)));
        // closing (0,0) while (0,1) has no sides yet: safe
        assert!(is_safe(&state, Move::vertical(0, 1)));

        // (0,1) is untouched; bring it to two sides, then check edges
        let state = draw(&state, &[Move::horizontal(0, 1)]);
        assert_eq!(state.sides_drawn(0, 1), 1);
        let state = draw(&state, &[Move::vertical(0, 2)]);
        assert_eq!(state.sides_drawn(0, 1), 2);
        // any edge taking (0,1) to three sides is unsafe
        assert!(!is_safe(&state, Move::horizontal(1, 1)));
        // an edge of the bottom-right box that stays away from three is safe
        assert!(is_safe(&state, Move::horizontal(2, 1)));
        // closing (0,0) now hands over (0,1)
        assert!(!is_safe(&state, Move::vertical(0, 1)));
    }

    #[test]
    fn test_safe_matches_three_sided_neighbour_rule() {
        let state = draw(
            &State::new(3, 3),
            &[
                Move::horizontal(0, 0),
                Move::vertical(0, 0),
                Move::horizontal(1, 1),
                Move::vertical(1, 1),
                Move::vertical(2, 3),
            ],
        );
        for mv in state.legal_moves() {
            let (next, _) = state.apply_move(mv, Player::Machine);
            let leaves_three = next
                .adjacent_boxes(mv)
                .into_iter()
                .any(|(r, c)| next.box_owner(r, c).is_none() && next.sides_drawn(r, c) == 3);
            assert_eq!(is_safe(&state, mv), !leaves_three, "{mv}");
        }
    }
}
