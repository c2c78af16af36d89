//! Headless simulation of complete games.

pub mod autoplay;

pub use autoplay::{Autoplay, AutoplayConfig, MatchSummary};
