use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Uniform};
use std::cmp::Ordering;

use super::greedy::simulate_move_with_greedy;
use super::minimax::search_value;
use super::safety::is_safe;
use super::BotPlayer;
use crate::config::{Difficulty, DifficultyConfig};
use crate::enums::{Move, Player};
use crate::state::State;

/// Base penalty for a move that hands the opponent a box, scaled by
/// `2 - safe_bias`
pub const UNSAFE_PENALTY: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: f64,
}

/// Score every legal move for the side to move (the machine when no turn is
/// set) and rank them best first. The sort is stable, so equal scores keep
/// canonical edge order.
///
/// score = search value of the resulting position
///       + boxes completed * capture_weight
///       + safe_bias if safe, else -(2 - safe_bias) * UNSAFE_PENALTY
///       + uniform noise in [-noise_magnitude, noise_magnitude]
pub fn score_moves<R: Rng + ?Sized>(
    state: &State,
    config: &DifficultyConfig,
    rng: &mut R,
) -> Vec<ScoredMove> {
    let mover = state.turn().unwrap_or(Player::Machine);
    // search values are machine-positive
    let sign = match mover {
        Player::Machine => 1.0,
        Player::Human => -1.0,
    };
    let noise = (config.noise_magnitude > 0.0)
        .then(|| Uniform::new_inclusive(-config.noise_magnitude, config.noise_magnitude));

    let mut scored: Vec<ScoredMove> = state
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let (next, next_turn) = simulate_move_with_greedy(state, mv, mover);
            let search = sign * search_value(&next, next_turn, config.depth.saturating_sub(1));
            let capture = state.captures_for(mv) as f64 * config.capture_weight;
            let safety = if is_safe(state, mv) {
                config.safe_bias
            } else {
                -(2.0 - config.safe_bias) * UNSAFE_PENALTY
            };
            let jitter = noise.as_ref().map_or(0.0, |dist| dist.sample(rng));
            ScoredMove {
                mv,
                score: search + capture + safety + jitter,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// Pick a move with a custom tuning. With probability `mistake_chance` the
/// pick is a uniformly random legal move regardless of scores; otherwise it
/// is uniform among the `top_k` best-scored moves. `None` only when no legal
/// move is left.
pub fn choose_move_with<R: Rng + ?Sized>(
    state: &State,
    config: &DifficultyConfig,
    rng: &mut R,
) -> Option<Move> {
    let legal = state.legal_moves();
    if legal.is_empty() {
        return None;
    }

    if rng.gen::<f64>() < config.mistake_chance {
        let mv = *legal.choose(rng)?;
        log::debug!("Deliberate blunder: {}", mv);
        return Some(mv);
    }

    let ranked = score_moves(state, config, rng);
    let k = config.top_k.clamp(1, ranked.len());
    let pick = ranked[..k].choose(rng)?;
    log::debug!(
        "Picked {} (score {:.2}) among top {} of {} moves",
        pick.mv,
        pick.score,
        k,
        ranked.len()
    );
    Some(pick.mv)
}

pub fn choose_move<R: Rng + ?Sized>(
    state: &State,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    choose_move_with(state, difficulty.config(), rng)
}

/// Difficulty-tuned search player
pub struct MinimaxPlayer {
    name: String,
    config: DifficultyConfig,
}

impl MinimaxPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        MinimaxPlayer {
            name: format!("Minimax ({})", difficulty),
            config: difficulty.config().clone(),
        }
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }
}

impl BotPlayer for MinimaxPlayer {
    fn name(&self) -> &str {
        &self.name
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
        choose_move_with(state, &self.config, rng)
    }
}
