//! Game controller: turn order, move validation, end detection and the
//! finished-game record handed to the leaderboard collaborator.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::{validate_grid, GameConfiguration};
use crate::enums::{GamePhase, Move, Outcome, Player};
use crate::errors::{BoxesResult, ConfigResult, GameError, GameResult};
use crate::players::{BotPlayer, MinimaxPlayer};
use crate::state::State;

/// Finished-game record, scores seen from the human side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: Outcome,
    pub you: u32,
    pub ai: u32,
    /// `"RxC"`
    pub grid: String,
    pub difficulty: String,
}

/// What an accepted move did
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub player: Player,
    pub mv: Move,
    pub captured: u32,
    /// `None` once the game is over
    pub next_turn: Option<Player>,
    /// Present only on the move that ended the game
    pub summary: Option<GameSummary>,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfiguration,
    state: State,
    phase: GamePhase,
}

impl Game {
    pub fn new(config: GameConfiguration) -> BoxesResult<Self> {
        config.validate()?;
        log::info!("New {} game on a {} grid", config.difficulty, config.grid_label());
        Ok(Game {
            state: State::new(config.rows, config.cols),
            config,
            phase: GamePhase::AwaitingFirstMove,
        })
    }

    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_turn(&self) -> Option<Player> {
        self.state.turn()
    }

    /// Throw away the board and wait for a new first move. The grid may
    /// change; difficulty is kept.
    pub fn reset(&mut self, rows: usize, cols: usize) -> ConfigResult<()> {
        validate_grid(rows, cols)?;
        self.config.rows = rows;
        self.config.cols = cols;
        self.state = State::new(rows, cols);
        self.phase = GamePhase::AwaitingFirstMove;
        log::info!("Game reset to {}", self.config.grid_label());
        Ok(())
    }

    /// Hand the first turn to `first`.
    pub fn start(&mut self, first: Player) -> GameResult<()> {
        if self.phase != GamePhase::AwaitingFirstMove {
            return Err(GameError::GameAlreadyStarted);
        }
        self.state.set_turn(Some(first));
        self.phase = GamePhase::InProgress;
        log::info!(
            "🎯 PHASE TRANSITION: AwaitingFirstMove → InProgress, {:?} moves first",
            first
        );
        Ok(())
    }

    /// Coin flip for the starting player.
    pub fn start_with_coin_flip<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<Player> {
        let first = if rng.gen_bool(0.5) {
            Player::Human
        } else {
            Player::Machine
        };
        self.start(first)?;
        Ok(first)
    }

    fn validate(&self, player: Player, mv: Move) -> GameResult<()> {
        match self.phase {
            GamePhase::AwaitingFirstMove => return Err(GameError::GameNotStarted),
            GamePhase::GameOver => return Err(GameError::GameOver),
            GamePhase::InProgress => {}
        }
        if self.state.turn() != Some(player) {
            return Err(GameError::not_player_turn(self.state.turn(), player));
        }
        match self.state.edge(mv) {
            None => Err(GameError::EdgeOutOfBounds {
                mv,
                rows: self.state.rows(),
                cols: self.state.cols(),
            }),
            Some(true) => Err(GameError::EdgeAlreadyDrawn { mv }),
            Some(false) => Ok(()),
        }
    }

    /// Play `mv` for `player`. Rejected requests leave the game untouched.
    /// Completing a box keeps the turn; otherwise it passes to the opponent.
    pub fn submit_move(&mut self, player: Player, mv: Move) -> GameResult<MoveOutcome> {
        if let Err(err) = self.validate(player, mv) {
            log::debug!("Rejected {} from {:?}: {}", mv, player, err);
            return Err(err);
        }

        let (mut next, captured) = self.state.apply_move(mv, player);
        let mut summary = None;
        if next.is_full() {
            next.set_turn(None);
            self.state = next;
            self.phase = GamePhase::GameOver;
            let record = self.build_summary();
            log::info!(
                "🏁 Game over on {}: {:?} {}-{}",
                record.grid,
                record.result,
                record.you,
                record.ai
            );
            summary = Some(record);
        } else {
            let next_turn = if captured > 0 { player } else { player.opponent() };
            next.set_turn(Some(next_turn));
            self.state = next;
        }

        Ok(MoveOutcome {
            player,
            mv,
            captured,
            next_turn: self.state.turn(),
            summary,
        })
    }

    /// Play for the machine at the configured difficulty until the turn
    /// passes or the game ends.
    pub fn play_machine_turn(&mut self, rng: &mut dyn RngCore) -> GameResult<Vec<MoveOutcome>> {
        let machine = MinimaxPlayer::new(self.config.difficulty);
        self.play_turn(Player::Machine, &machine, rng)
    }

    /// Let `bot` play for `player` until the turn passes or the game ends.
    /// Scripted seats only; the machine seat goes through `play_machine_turn`.
    pub fn play_turn(
        &mut self,
        player: Player,
        bot: &dyn BotPlayer,
        rng: &mut dyn RngCore,
    ) -> GameResult<Vec<MoveOutcome>> {
        let mut outcomes = Vec::new();
        while self.phase == GamePhase::InProgress && self.state.turn() == Some(player) {
            let playable = self.state.legal_moves();
            let Some(mv) = bot.decide(&self.state, &playable, rng) else {
                break;
            };
            outcomes.push(self.submit_move(player, mv)?);
        }
        if outcomes.is_empty() {
            self.validate_turn(player)?;
        }
        Ok(outcomes)
    }

    fn validate_turn(&self, player: Player) -> GameResult<()> {
        match self.phase {
            GamePhase::AwaitingFirstMove => Err(GameError::GameNotStarted),
            GamePhase::GameOver => Err(GameError::GameOver),
            GamePhase::InProgress if self.state.turn() != Some(player) => {
                Err(GameError::not_player_turn(self.state.turn(), player))
            }
            GamePhase::InProgress => Ok(()),
        }
    }

    /// Result record; `None` until the game is over.
    pub fn summary(&self) -> Option<GameSummary> {
        (self.phase == GamePhase::GameOver).then(|| self.build_summary())
    }

    fn build_summary(&self) -> GameSummary {
        let you = self.state.score(Player::Human);
        let ai = self.state.score(Player::Machine);
        let result = match self.state.leader() {
            Some(Player::Human) => Outcome::Win,
            Some(Player::Machine) => Outcome::Loss,
            None => Outcome::Draw,
        };
        GameSummary {
            result,
            you,
            ai,
            grid: self.config.grid_label(),
            difficulty: self.config.difficulty.to_string(),
        }
    }
}
