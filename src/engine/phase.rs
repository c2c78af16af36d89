//! Round phases.
//!
//! ```text
//!            tick (beat left)            beat (correct)
//! Answered ──────────────────► Awaiting ───────────────► Answered
//!    │  tick (sequence done,          │ beat (wrong)
//!    │  player extends)               ▼
//!    ├──────────────────► Extending ──► RoundEnding ──tick──► next player
//!    │                        beat
//!    └─ tick (sequence done, no extension) ──────────────────► next player
//!
//! Awaiting / Extending ──tick (no answer)──► timeout, next player or Over
//! ```

use serde::{Deserialize, Serialize};

use crate::core::beat::Beat;

/// How the last judged round went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// A timing window closed without an answer.
    Timeout,
    /// A beat did not match the sequence.
    Wrong,
    /// The whole sequence was reproduced.
    Correct,
}

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The previous window is latched. `cursor` is the next sequence
    /// position to reveal.
    Answered { cursor: usize },

    /// Waiting for the beat at `position`.
    Awaiting { position: usize, expected: Beat },

    /// Sequence reproduced; the player must append one beat.
    Extending,

    /// The next tick hands the turn over.
    RoundEnding,

    /// The game is decided.
    Over,
}

impl Phase {
    /// Start-of-round phase.
    pub const FRESH: Phase = Phase::Answered { cursor: 0 };

    /// Is an input expected in the current window?
    #[must_use]
    pub fn beat_pending(&self) -> bool {
        matches!(self, Phase::Awaiting { .. } | Phase::Extending)
    }

    /// The value the current window expects, if reproducing.
    #[must_use]
    pub fn expected(&self) -> Option<Beat> {
        match self {
            Phase::Awaiting { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}
