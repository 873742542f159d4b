use super::State;

use crate::enums::{Axis, Move, Player};

impl State {
    /// Draw `mv` for `owner` and return the new snapshot together with the
    /// number of boxes it completed. Drawing an edge that is out of range or
    /// already drawn is a no-op returning an unchanged copy and `0`.
    /// The side to move is left as it was.
    pub fn apply_move(&self, mv: Move, owner: Player) -> (State, u32) {
        let mut next = self.clone();
        let captured = next.draw_edge(mv, owner);
        (next, captured)
    }

    /// In-place edge draw for snapshots this caller owns exclusively.
    pub(crate) fn draw_edge(&mut self, mv: Move, owner: Player) -> u32 {
        let Some(index) = self.edge_index(mv) else {
            log::debug!("Ignoring out-of-range edge {}", mv);
            return 0;
        };
        let edge = match mv.axis {
            Axis::Horizontal => &mut self.horizontal[index],
            Axis::Vertical => &mut self.vertical[index],
        };
        if *edge {
            return 0;
        }
        *edge = true;

        let mut captured = 0;
        for (row, col) in self.adjacent_boxes(mv) {
            let slot = row * self.cols + col;
            if self.boxes[slot].is_none() && self.sides_drawn(row, col) == 4 {
                self.boxes[slot] = Some(owner);
                self.scores[owner.index()] += 1;
                captured += 1;
            }
        }
        if captured > 0 {
            log::debug!("{:?} drew {} and completed {} box(es)", owner, mv, captured);
        }
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::PLAYERS;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn assert_invariants(state: &State) {
        let total = state.score(Player::Human) as usize
            + state.score(Player::Machine) as usize
            + state.unowned_boxes();
        assert_eq!(total, state.rows() * state.cols());
        for player in PLAYERS {
            assert_eq!(state.score(player) as usize, state.owned_by(player));
        }
        for row in 0..state.rows() {
            for col in 0..state.cols() {
                let complete = state.sides_drawn(row, col) == 4;
                assert_eq!(state.box_owner(row, col).is_some(), complete);
            }
        }
    }

    fn all_edges(state: &State) -> Vec<Move> {
        let mut edges = Vec::new();
        for row in 0..=state.rows() {
            for col in 0..state.cols() {
                edges.push(Move::horizontal(row, col));
            }
        }
        for row in 0..state.rows() {
            for col in 0..=state.cols() {
                edges.push(Move::vertical(row, col));
            }
        }
        edges
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = State::new(3, 4);
        assert_eq!(state.edge_count(), 4 * 4 + 3 * 5);
        assert_eq!(state.legal_moves().len(), 31);
        assert_eq!(state.drawn_edge_count(), 0);
        assert_eq!(state.unowned_boxes(), 12);
        assert_eq!(state.turn(), None);
        assert_invariants(&state);
    }

    #[test]
    fn test_apply_move_draws_edge_without_capture() {
        let state = State::new(2, 2);
        let mv = Move::horizontal(1, 0);
        let (next, captured) = state.apply_move(mv, Player::Human);

        assert_eq!(captured, 0);
        assert!(next.is_drawn(mv));
        assert!(!state.is_drawn(mv), "original snapshot must not change");
        assert_eq!(next.sides_drawn(0, 0), 1);
        assert_eq!(next.sides_drawn(1, 0), 1);
        assert_eq!(next.legal_moves().len(), 11);
    }

    #[test]
    fn test_fourth_side_captures_box() {
        let mut state = State::new(2, 2);
        for mv in [Move::horizontal(0, 0), Move::horizontal(1, 0), Move::vertical(0, 0)] {
            assert_eq!(state.draw_edge(mv, Player::Human), 0);
        }
        assert_eq!(state.captures_for(Move::vertical(0, 1)), 1);

        let (next, captured) = state.apply_move(Move::vertical(0, 1), Player::Machine);
        assert_eq!(captured, 1);
        assert_eq!(next.box_owner(0, 0), Some(Player::Machine));
        assert_eq!(next.score(Player::Machine), 1);
        assert_eq!(next.score(Player::Human), 0);
        assert_invariants(&next);
    }

    #[test]
    fn test_shared_edge_captures_two_boxes() {
        let mut state = State::new(1, 2);
        for mv in [
            Move::horizontal(0, 0),
            Move::horizontal(1, 0),
            Move::vertical(0, 0),
            Move::horizontal(0, 1),
            Move::horizontal(1, 1),
            Move::vertical(0, 2),
        ] {
            state.draw_edge(mv, Player::Human);
        }
        assert_eq!(state.captures_for(Move::vertical(0, 1)), 2);

        let (next, captured) = state.apply_move(Move::vertical(0, 1), Player::Human);
        assert_eq!(captured, 2);
        assert_eq!(next.score(Player::Human), 2);
        assert!(next.is_full());
        assert!(next.legal_moves().is_empty());
    }

    #[test]
    fn test_redrawing_edge_is_noop() {
        let (state, _) = State::new(2, 2).apply_move(Move::vertical(1, 2), Player::Human);
        let (again, captured) = state.apply_move(Move::vertical(1, 2), Player::Machine);
        assert_eq!(captured, 0);
        assert_eq!(again, state);
    }

    #[test]
    fn test_out_of_range_edge_is_noop() {
        let state = State::new(2, 2);
        for mv in [
            Move::horizontal(3, 0),
            Move::horizontal(0, 2),
            Move::vertical(2, 0),
            Move::vertical(0, 3),
        ] {
            assert!(!state.in_bounds(mv));
            let (next, captured) = state.apply_move(mv, Player::Human);
            assert_eq!(captured, 0);
            assert_eq!(next, state);
        }
    }

    #[test]
    fn test_ownership_never_changes() {
        let mut state = State::new(1, 1);
        for mv in State::box_edges(0, 0) {
            state.draw_edge(mv, Player::Human);
        }
        assert_eq!(state.box_owner(0, 0), Some(Player::Human));
        let (next, captured) = state.apply_move(Move::horizontal(0, 0), Player::Machine);
        assert_eq!(captured, 0);
        assert_eq!(next.box_owner(0, 0), Some(Player::Human));
    }

    #[test]
    fn test_random_playouts_keep_invariants() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        for _ in 0..50 {
            let rows = rng.gen_range(1..=7);
            let cols = rng.gen_range(1..=7);
            let mut state = State::new(rows, cols);
            let mut player = Player::Human;

            while let Some(&mv) = state.legal_moves().choose(&mut rng) {
                let (next, captured) = state.apply_move(mv, player);
                for edge in all_edges(&state) {
                    if state.is_drawn(edge) {
                        assert!(next.is_drawn(edge));
                    }
                }
                assert_eq!(next.drawn_edge_count(), state.drawn_edge_count() + 1);
                assert_invariants(&next);
                if captured == 0 {
                    player = player.opponent();
                }
                state = next;
            }
            assert!(state.is_full());
            assert_eq!(state.drawn_edge_count(), state.edge_count());
        }
    }
}
