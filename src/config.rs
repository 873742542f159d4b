//! Game configuration and the difficulty tuning table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ConfigError, ConfigResult};

pub const MIN_GRID_SIZE: usize = 1;
pub const MAX_GRID_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Tuning bundle for the machine player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Plies searched per candidate move, counting the candidate itself
    pub depth: u32,
    /// Probability of ignoring all scores and playing a random legal move
    pub mistake_chance: f64,
    /// Bonus for safe moves; unsafe moves lose `(2 - safe_bias) * UNSAFE_PENALTY`
    pub safe_bias: f64,
    /// Half-width of the uniform noise added to every score
    pub noise_magnitude: f64,
    /// Final pick is uniform among this many best-ranked moves
    pub top_k: usize,
    pub capture_weight: f64,
}

const EASY: DifficultyConfig = DifficultyConfig {
    depth: 1,
    mistake_chance: 0.33,
    safe_bias: 0.5,
    noise_magnitude: 6.0,
    top_k: 5,
    capture_weight: 5.0,
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    depth: 2,
    mistake_chance: 0.12,
    safe_bias: 1.0,
    noise_magnitude: 2.0,
    top_k: 3,
    capture_weight: 8.0,
};

const HARD: DifficultyConfig = DifficultyConfig {
    depth: 3,
    mistake_chance: 0.03,
    safe_bias: 1.5,
    noise_magnitude: 0.25,
    top_k: 1,
    capture_weight: 10.0,
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn config(self) -> &'static DifficultyConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

impl DifficultyConfig {
    /// Fully deterministic tuning: no blunders, no noise, always the top move.
    pub fn deterministic(depth: u32) -> Self {
        DifficultyConfig {
            depth,
            mistake_chance: 0.0,
            safe_bias: 1.0,
            noise_magnitude: 0.0,
            top_k: 1,
            capture_weight: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfiguration {
    pub rows: usize,
    pub cols: usize,
    pub difficulty: Difficulty,
}

impl Default for GameConfiguration {
    fn default() -> Self {
        GameConfiguration {
            rows: 3,
            cols: 3,
            difficulty: Difficulty::Medium,
        }
    }
}

impl GameConfiguration {
    pub fn new(rows: usize, cols: usize, difficulty: Difficulty) -> Self {
        GameConfiguration {
            rows,
            cols,
            difficulty,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        validate_grid(self.rows, self.cols)
    }

    /// Parse and validate a JSON configuration. Missing fields fall back to
    /// the defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: GameConfiguration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Grid label used in result records, e.g. `"3x4"`
    pub fn grid_label(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }
}

pub fn validate_grid(rows: usize, cols: usize) -> ConfigResult<()> {
    let range = MIN_GRID_SIZE..=MAX_GRID_SIZE;
    if range.contains(&rows) && range.contains(&cols) {
        Ok(())
    } else {
        Err(ConfigError::InvalidGrid {
            rows,
            cols,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}
