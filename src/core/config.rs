//! Game configuration types.
//!
//! The presentation layer collects these from its new-game dialog:
//! - `Difficulty`: drives sequence length, beat alphabet and drum tempo
//! - `ModeKind`: single-player against the computer, or multi-player elimination
//! - `GameConfig`: combines both with the player names and an RNG seed

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Most contestants a multi-player game supports.
pub const MAX_PLAYERS: usize = 10;

/// Fewest contestants a multi-player game supports.
pub const MIN_MULTI_PLAYERS: usize = 2;

/// Difficulty level, fixed for the whole game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Tunables for this level.
    #[must_use]
    pub const fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                starting_length: 3,
                beat_types: 4,
                drum_speed: 2,
            },
            Difficulty::Medium => DifficultySettings {
                starting_length: 5,
                beat_types: 4,
                drum_speed: 4,
            },
            Difficulty::Hard => DifficultySettings {
                starting_length: 7,
                beat_types: 4,
                drum_speed: 6,
            },
        }
    }
}

/// Per-difficulty tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Sequence length once the Beatstarter has opened the game.
    pub starting_length: usize,

    /// Number of distinct drums.
    pub beat_types: u8,

    /// Pixels per frame the drums scroll at; the presentation layer's tempo.
    pub drum_speed: u32,
}

/// Which rule set a game plays by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    SinglePlayer,
    MultiPlayer,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: ModeKind,

    /// Contestant names in seating order. Blank names are replaced by
    /// `"Player N"` during validation.
    pub player_names: Vec<String>,

    pub difficulty: Difficulty,

    /// Seed for sequence generation and computer beats.
    pub seed: u64,
}

impl GameConfig {
    /// One human against the computer.
    pub fn single_player(name: impl Into<String>) -> Self {
        Self {
            mode: ModeKind::SinglePlayer,
            player_names: vec![name.into()],
            difficulty: Difficulty::default(),
            seed: 0,
        }
    }

    /// Several humans, last one standing wins.
    pub fn multi_player<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            mode: ModeKind::MultiPlayer,
            player_names: names.into_iter().map(Into::into).collect(),
            difficulty: Difficulty::default(),
            seed: 0,
        }
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Tunables for the configured difficulty.
    #[must_use]
    pub fn settings(&self) -> DifficultySettings {
        self.difficulty.settings()
    }

    /// Check the player count for the mode and fill in blank names.
    pub fn validate(mut self) -> Result<Self> {
        let count = self.player_names.len();
        let allowed = match self.mode {
            ModeKind::SinglePlayer => count == 1,
            ModeKind::MultiPlayer => (MIN_MULTI_PLAYERS..=MAX_PLAYERS).contains(&count),
        };
        if !allowed {
            return Err(GameError::PlayerCount {
                mode: self.mode,
                count,
            });
        }

        for (i, name) in self.player_names.iter_mut().enumerate() {
            if name.trim().is_empty() {
                *name = format!("Player {}", i + 1);
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_settings() {
        assert_eq!(Difficulty::Easy.settings().starting_length, 3);
        assert_eq!(Difficulty::Medium.settings().starting_length, 5);
        assert_eq!(Difficulty::Hard.settings().starting_length, 7);

        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.settings().beat_types, 4);
        }

        assert!(Difficulty::Easy.settings().drum_speed < Difficulty::Hard.settings().drum_speed);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::multi_player(["Ann", "Bo"])
            .with_difficulty(Difficulty::Hard)
            .with_seed(7);

        assert_eq!(config.mode, ModeKind::MultiPlayer);
        assert_eq!(config.player_names, vec!["Ann", "Bo"]);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, 7);
        assert_eq!(config.settings().starting_length, 7);
    }

    #[test]
    fn test_validate_player_counts() {
        assert!(GameConfig::single_player("Ann").validate().is_ok());
        assert!(GameConfig::multi_player(["Ann"]).validate().is_err());
        assert!(GameConfig::multi_player(["Ann", "Bo"]).validate().is_ok());

        let ten: Vec<_> = (1..=10).map(|i| format!("P{}", i)).collect();
        assert!(GameConfig::multi_player(ten.clone()).validate().is_ok());

        let eleven: Vec<_> = (1..=11).map(|i| format!("P{}", i)).collect();
        match GameConfig::multi_player(eleven).validate() {
            Err(GameError::PlayerCount { mode, count }) => {
                assert_eq!(mode, ModeKind::MultiPlayer);
                assert_eq!(count, 11);
            }
            other => panic!("unexpected: {:?}", other),
        }

        let mut two = GameConfig::single_player("Ann");
        two.player_names.push("Bo".into());
        assert!(two.validate().is_err());
    }

    #[test]
    fn test_validate_fills_blank_names() {
        let config = GameConfig::multi_player(["Ann", "", "  "]).validate().unwrap();
        assert_eq!(config.player_names, vec!["Ann", "Player 2", "Player 3"]);
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::single_player("Ann").with_difficulty(Difficulty::Medium);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
