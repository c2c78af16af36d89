//! Scores and the high-score table.
//!
//! Scores rank by points, highest first. Ties are never broken: the table
//! keeps them in the order they were submitted. `Score` has no `Ord`, since
//! two tied scores with different winners are not equal; rank with
//! `sort_by_key(|s| Reverse(s.points))`.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::player::PlayerId;

/// Number of slots in a default high-score table.
pub const HIGH_SCORE_SLOTS: usize = 3;

/// Live score of a game in progress.
///
/// `points` is the length of the sequence at the moment `winner` last
/// completed it. `winner == None` means no contestant has completed it yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub winner: Option<PlayerId>,
    pub points: u32,
}

impl Score {
    #[must_use]
    pub fn new(winner: PlayerId, points: u32) -> Self {
        Self {
            winner: Some(winner),
            points,
        }
    }
}

/// Immutable snapshot of a finished game's winner, for high-score comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub name: String,
    pub points: u32,
}

impl HighScore {
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Bounded list of the best scores, highest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
    slots: usize,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self::with_slots(HIGH_SCORE_SLOTS)
    }
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(slots: usize) -> Self {
        Self {
            entries: Vec::with_capacity(slots),
            slots,
        }
    }

    /// Insert a score, returning its 0-based rank if it made the table.
    ///
    /// An entry is placed after every existing entry with equal points.
    pub fn submit(&mut self, entry: HighScore) -> Option<usize> {
        if !self.qualifies(entry.points) {
            return None;
        }
        let rank = self.rank_of(entry.points);
        self.entries.insert(rank, entry);
        self.entries.truncate(self.slots);
        Some(rank)
    }

    /// Would a score with these points make the table?
    #[must_use]
    pub fn qualifies(&self, points: u32) -> bool {
        self.rank_of(points) < self.slots
    }

    /// Rank a new entry would take: after every entry with at least as many points.
    fn rank_of(&self, points: u32) -> usize {
        self.entries.partition_point(|e| e.points >= points)
    }

    #[must_use]
    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode for the collaborator that persists the table.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a table produced by [`HighScoreTable::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
