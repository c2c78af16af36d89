//! Mode rules trait.
//!
//! The engine owns turn order, timing windows and the sequence. The two
//! decisions that differ between game modes are asked through `ModeRules`:
//! - Does the current player append a beat after reproducing the sequence?
//! - Does an elimination end the game, and who survives it?

use crate::core::player::{Player, PlayerId, Roster};
use crate::core::score::Score;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A contestant completed the sequence last, or survived everyone else.
    Winner(PlayerId),
    /// Nobody completed the sequence (e.g. single player out on the first try).
    NoWinner,
}

impl GameResult {
    /// Derive the result from the final score.
    #[must_use]
    pub fn from_score(score: &Score) -> Self {
        match score.winner {
            Some(player) => GameResult::Winner(player),
            None => GameResult::NoWinner,
        }
    }
}

/// What an elimination means for the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elimination {
    /// Play continues with the remaining contestants.
    Continue,
    /// The game is decided. `survivor` is awarded the win if nobody has
    /// a recorded score.
    GameOver { survivor: Option<PlayerId> },
}

/// Mode-specific decisions, evaluated as pure functions of engine state.
pub trait ModeRules {
    /// Must `current`, having just reproduced the sequence, append a beat?
    fn will_add_beat(&self, current: &Player) -> bool;

    /// Called after the current player has been marked out and counted.
    fn on_player_eliminated(&self, roster: &Roster, players_out: usize) -> Elimination;
}
