//! # catch-the-beat
//!
//! Engine for a turn-based "repeat-the-sequence" rhythm game. Players take
//! turns reproducing a growing sequence of drum beats, one timing window per
//! beat.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine never renders, plays audio or blocks.
//!    It is driven by `tick` and `beat` and reports through `FrontendLink`.
//!
//! 2. **Explicit Phases**: A round is a small state machine (`Phase`) rather
//!    than a set of independent flags.
//!
//! 3. **Rules as Data**: Single- and multi-player differ only in two
//!    decisions, answered by `GameMode` through `ModeRules`.
//!
//! 4. **Deterministic**: All randomness flows through `BeatSource`; the
//!    default `GameRng` is seeded from the game configuration.
//!
//! ## Modules
//!
//! - `core`: Beats, players, scores, configuration, RNG, errors
//! - `rules`: Game modes and results
//! - `engine`: The round/turn state machine and frontend link
//! - `sim`: Autoplay driver for headless games
//!
//! ## Example
//!
//! ```
//! use catch_the_beat::{Game, GameConfig, NullLink, PlayerId};
//!
//! let config = GameConfig::multi_player(["Ann", "Bo"]).with_seed(42);
//! let mut game = Game::new(config, NullLink).unwrap();
//!
//! // The Beatstarter opens the game on its own
//! while game.current_player_id() == PlayerId::BEATSTARTER {
//!     game.tick().unwrap();
//! }
//! assert_eq!(game.current_player().name(), "Ann");
//! assert_eq!(game.sequence_len(), 3);
//! ```

pub mod core;
pub mod rules;
pub mod engine;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Beat, BeatSource, Difficulty, DifficultySettings, GameConfig, GameError, GameRng, HighScore,
    HighScoreTable, ModeKind, Player, PlayerId, Result, Roster, Score,
};

pub use crate::rules::{Elimination, GameMode, GameResult, ModeRules};

pub use crate::engine::{FrontendLink, Game, LinkEvent, NullLink, Phase, RecordingLink, RoundResult, SoundCue};

pub use crate::sim::{Autoplay, AutoplayConfig, MatchSummary};
