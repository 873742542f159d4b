use rand::seq::SliceRandom;
use rand::RngCore;

use super::safety::is_safe;
use super::BotPlayer;
use crate::enums::Move;
use crate::state::State;

/// Greedy Player
/// Takes the biggest immediate capture, otherwise a random safe move,
/// otherwise any random move. No lookahead.
pub struct GreedyPlayer;

impl BotPlayer for GreedyPlayer {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn decide(
        &self,
        state: &State,
        playable_moves: &[Move],
        rng: &mut dyn RngCore,
    ) -> Option<Move> {
        if playable_moves.len() == 1 {
            return Some(playable_moves[0]);
        }

        let best_capture = playable_moves
            .iter()
            .copied()
            .map(|mv| (state.captures_for(mv), mv))
            .filter(|&(captured, _)| captured > 0)
            .max_by_key(|&(captured, _)| captured);
        if let Some((_, mv)) = best_capture {
            return Some(mv);
        }

        let safe: Vec<Move> = playable_moves
            .iter()
            .copied()
            .filter(|&mv| is_safe(state, mv))
            .collect();
        safe.choose(rng)
            .or_else(|| playable_moves.choose(rng))
            .copied()
    }
}
