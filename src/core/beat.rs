//! Beat values.
//!
//! A beat identifies which drum was struck. Values are 1-based on the game
//! side (`1..=beat_types`) and 0-based on the presentation side, where they
//! index drum sprites and drum sounds.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// A validated beat value in `[1, beat_types]`.
///
/// Deserialization only rejects 0; the alphabet size is not known there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Beat(u8);

impl Beat {
    /// Create a beat, checking it against the number of beat types in play.
    pub fn new(value: u8, beat_types: u8) -> Result<Self> {
        if value == 0 || value > beat_types {
            return Err(GameError::InvalidBeat { value, beat_types });
        }
        Ok(Self(value))
    }

    /// Create a beat from a 0-based drum index.
    pub fn from_index(index: u8, beat_types: u8) -> Result<Self> {
        Self::new(index.saturating_add(1), beat_types)
    }

    /// The 1-based beat value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The 0-based drum index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Beat {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value, u8::MAX)
    }
}

impl From<Beat> for u8 {
    fn from(beat: Beat) -> u8 {
        beat.0
    }
}

impl std::fmt::Display for Beat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Beat({})", self.0)
    }
}
