//! Notifications from the engine to the presentation layer.
//!
//! The engine never renders, plays audio or blocks. It reports what happened
//! through `FrontendLink` and never waits for an answer.

use crate::core::beat::Beat;

/// Sound effects the engine asks for, besides the drum sounds themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A contestant reproduced the whole sequence.
    Correct,
    /// A contestant was eliminated.
    Fail,
}

/// Callback surface the engine drives.
pub trait FrontendLink {
    /// The current round is over; `game_over` when the whole game is too.
    fn round_ended(&mut self, game_over: bool);

    /// The beat at `position` in the sequence was judged. `beat` is the
    /// value to reveal there.
    fn beat_judged(&mut self, position: usize, beat: Beat, correct: bool);

    /// Play a sound effect.
    fn play_sound(&mut self, cue: SoundCue);

    /// Lock keyboard input while a computer player holds the turn.
    fn input_locked(&mut self, locked: bool);

    /// A computer player struck `beat`, for drum animation and drum sound.
    fn computer_beat(&mut self, _beat: Beat) {}
}

/// Link that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLink;

impl FrontendLink for NullLink {
    fn round_ended(&mut self, _game_over: bool) {}
    fn beat_judged(&mut self, _position: usize, _beat: Beat, _correct: bool) {}
    fn play_sound(&mut self, _cue: SoundCue) {}
    fn input_locked(&mut self, _locked: bool) {}
}

/// One notification, as captured by [`RecordingLink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkEvent {
    RoundEnded { game_over: bool },
    BeatJudged { position: usize, beat: Beat, correct: bool },
    Sound(SoundCue),
    InputLocked(bool),
    ComputerBeat(Beat),
}

/// Link that records every notification in order.
///
/// Useful for headless frontends that poll instead of reacting, and for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingLink {
    events: Vec<LinkEvent>,
}

impl RecordingLink {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[LinkEvent] {
        &self.events
    }

    /// Take all events recorded so far.
    pub fn drain(&mut self) -> Vec<LinkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Count events matching a predicate.
    pub fn count(&self, pred: impl Fn(&LinkEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl FrontendLink for RecordingLink {
    fn round_ended(&mut self, game_over: bool) {
        self.events.push(LinkEvent::RoundEnded { game_over });
    }

    fn beat_judged(&mut self, position: usize, beat: Beat, correct: bool) {
        self.events.push(LinkEvent::BeatJudged {
            position,
            beat,
            correct,
        });
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.events.push(LinkEvent::Sound(cue));
    }

    fn input_locked(&mut self, locked: bool) {
        self.events.push(LinkEvent::InputLocked(locked));
    }

    fn computer_beat(&mut self, beat: Beat) {
        self.events.push(LinkEvent::ComputerBeat(beat));
    }
}
