//! Round/turn state machine and its frontend surface.
//!
//! - `game`: `Game`, driven by `tick` and `beat`
//! - `phase`: explicit round phases and round results
//! - `link`: notifications the engine issues to the presentation layer

pub mod game;
pub mod link;
pub mod phase;

pub use game::Game;
pub use link::{FrontendLink, LinkEvent, NullLink, RecordingLink, SoundCue};
pub use phase::{Phase, RoundResult};
