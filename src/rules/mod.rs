//! Mode rules for the engine.
//!
//! `GameMode` is a tagged variant; the engine asks it two questions through
//! `ModeRules` and keeps all turn and timing logic to itself.

pub mod engine;
pub mod mode;

pub use engine::{Elimination, GameResult, ModeRules};
pub use mode::GameMode;
