//! Error type shared by the whole engine.

use super::config::ModeKind;

/// Errors surfaced by game construction, input and high-score encoding.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// A beat value outside `[1, beat_types]`.
    #[error("Invalid beat {value}: expected 1..={beat_types}")]
    InvalidBeat { value: u8, beat_types: u8 },

    /// `tick` or `beat` called after the outcome was decided.
    #[error("Game is over")]
    GameOver,

    /// Wrong number of player names for the selected mode.
    #[error("{mode:?} game cannot have {count} players")]
    PlayerCount { mode: ModeKind, count: usize },

    /// High-score table encoding or decoding failed.
    #[error("Codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
