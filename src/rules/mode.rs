//! The two game modes.
//!
//! ## SinglePlayer
//!
//! Beatstarter, one human and the computer Repeater. Only computers extend
//! the sequence; the human only reproduces it. Any elimination ends the game.
//!
//! ## MultiPlayer
//!
//! Beatstarter plus 2..=10 humans. Everyone extends the sequence after
//! reproducing it. The game ends when one contestant is left standing.

use serde::{Deserialize, Serialize};

use super::engine::{Elimination, ModeRules};
use crate::core::config::ModeKind;
use crate::core::player::{Player, Roster};

/// Rule set of a game, with the fields each mode needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    SinglePlayer,
    MultiPlayer { contestants: usize },
}

impl GameMode {
    /// Mode matching a freshly built roster.
    #[must_use]
    pub fn for_roster(kind: ModeKind, roster: &Roster) -> Self {
        match kind {
            ModeKind::SinglePlayer => GameMode::SinglePlayer,
            ModeKind::MultiPlayer => GameMode::MultiPlayer {
                contestants: roster.contestant_count(),
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            GameMode::SinglePlayer => ModeKind::SinglePlayer,
            GameMode::MultiPlayer { .. } => ModeKind::MultiPlayer,
        }
    }
}

impl ModeRules for GameMode {
    fn will_add_beat(&self, current: &Player) -> bool {
        match self {
            GameMode::SinglePlayer => current.is_computer(),
            GameMode::MultiPlayer { .. } => true,
        }
    }

    fn on_player_eliminated(&self, roster: &Roster, players_out: usize) -> Elimination {
        match *self {
            // Only the human can lose, and losing ends it
            GameMode::SinglePlayer => Elimination::GameOver { survivor: None },
            GameMode::MultiPlayer { contestants } => {
                if players_out + 1 == contestants {
                    Elimination::GameOver {
                        survivor: roster.survivors().next().map(|(id, _)| id),
                    }
                } else {
                    Elimination::Continue
                }
            }
        }
    }
}
