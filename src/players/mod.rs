// Players module - machine-side decision making
//
// Leaf helpers (safety, greedy playout, evaluation, search) come first; the
// bot implementations built on them follow.

use rand::RngCore;

use crate::enums::Move;
use crate::state::State;

pub mod greedy;
pub mod minimax;
pub mod safety;
pub mod value;

pub mod greedy_player;
pub mod minimax_player;
pub mod random;

pub use self::greedy::{resolve_chain, simulate_move_with_greedy};
pub use self::greedy_player::GreedyPlayer;
pub use self::minimax::search_value;
pub use self::minimax_player::{
    choose_move, choose_move_with, score_moves, MinimaxPlayer, ScoredMove,
};
pub use self::random::RandomPlayer;
pub use self::safety::is_safe;
pub use self::value::{evaluate, ValueWeights};

/// A machine player. All randomness comes from the injected `rng`, so a
/// seeded generator makes every decision reproducible.
pub trait BotPlayer {
    fn name(&self) -> &str;

    /// Pick one of `playable_moves`; `None` only when it is empty.
    fn decide(
        &self,
        state: &State,
        playable_moves: &[Move],
        rng: &mut dyn RngCore,
    ) -> Option<Move>;
}
