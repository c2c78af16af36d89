//! Core types: beats, players, scores, configuration, RNG, errors.
//!
//! Everything here is mode-agnostic. The round/turn state machine lives in
//! `engine`; the per-mode rules live in `rules`.

pub mod beat;
pub mod player;
pub mod score;
pub mod config;
pub mod rng;
pub mod error;

pub use beat::Beat;
pub use player::{Player, PlayerId, Roster, BEATSTARTER_NAME, REPEATER_NAME};
pub use score::{HighScore, HighScoreTable, Score, HIGH_SCORE_SLOTS};
pub use config::{Difficulty, DifficultySettings, GameConfig, ModeKind, MAX_PLAYERS, MIN_MULTI_PLAYERS};
pub use rng::{BeatSource, GameRng};
pub use error::{GameError, Result};
