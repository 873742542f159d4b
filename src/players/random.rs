use rand::prelude::*;

use crate::enums::Move;
use crate::state::State;

use super::BotPlayer;

pub struct RandomPlayer;

impl BotPlayer for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn decide(
        &self,
        _state: &State,
        playable_moves: &[Move],
        rng: &mut dyn RngCore,
    ) -> Option<Move> {
        playable_moves.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_random_player_stays_legal() {
        let state = State::new(3, 2);
        let legal = state.legal_moves();
        let mut rng = XorShiftRng::seed_from_u64(9);
        for _ in 0..50 {
            let mv = RandomPlayer.decide(&state, &legal, &mut rng).unwrap();
            assert!(legal.contains(&mv));
        }
        assert_eq!(RandomPlayer.decide(&state, &[], &mut rng), None);
    }
}
