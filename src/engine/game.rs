//! The round/turn state machine.
//!
//! An external timer calls [`Game::tick`] once per timing window and input
//! handlers call [`Game::beat`]. Both are plain synchronous mutations; the
//! caller serializes them onto one thread or one queue.
//!
//! A round belongs to one player: the sequence is revealed one position per
//! tick and each position must be answered before the next tick. After the
//! last position the player either appends a beat (when the mode says so) or
//! the turn passes straight on. Computer players answer on the same tick the
//! position is revealed.

use crate::core::beat::Beat;
use crate::core::config::{Difficulty, DifficultySettings, GameConfig, ModeKind};
use crate::core::error::{GameError, Result};
use crate::core::player::{Player, PlayerId, Roster};
use crate::core::rng::{BeatSource, GameRng};
use crate::core::score::{HighScore, Score};
use crate::rules::{Elimination, GameMode, GameResult, ModeRules};

use super::link::{FrontendLink, SoundCue};
use super::phase::{Phase, RoundResult};

/// One play session.
pub struct Game<L: FrontendLink, R: BeatSource = GameRng> {
    mode: GameMode,
    difficulty: Difficulty,
    settings: DifficultySettings,

    /// The sequence every player reproduces. Append-only.
    beats: Vec<Beat>,

    roster: Roster,

    /// `None` until the Beatstarter has been seated.
    current: Option<PlayerId>,

    players_out: usize,
    phase: Phase,
    round_result: Option<RoundResult>,
    score: Score,

    source: R,
    link: L,
}

impl<L: FrontendLink> Game<L, GameRng> {
    /// Start a game seeded from `config.seed`.
    pub fn new(config: GameConfig, link: L) -> Result<Self> {
        let source = GameRng::new(config.seed);
        Self::with_source(config, link, source)
    }
}

impl<L: FrontendLink, R: BeatSource> Game<L, R> {
    /// Start a game drawing its randomness from `source`.
    ///
    /// The sequence is seeded one short of the starting length: the
    /// Beatstarter's opening round appends the missing beat.
    pub fn with_source(config: GameConfig, link: L, mut source: R) -> Result<Self> {
        let config = config.validate()?;
        let settings = config.settings();

        let beats = (1..settings.starting_length)
            .map(|_| source.next_beat(settings.beat_types))
            .collect();

        let roster = match config.mode {
            ModeKind::SinglePlayer => {
                Roster::single_player(config.player_names.into_iter().next().unwrap_or_default())
            }
            ModeKind::MultiPlayer => Roster::multi_player(config.player_names.as_slice()),
        };
        let mode = GameMode::for_roster(config.mode, &roster);

        log::info!(
            "Starting {:?} game: {} contestants, {:?}",
            config.mode,
            roster.contestant_count(),
            config.difficulty
        );

        let mut game = Self {
            mode,
            difficulty: config.difficulty,
            settings,
            beats,
            roster,
            current: None,
            players_out: 0,
            phase: Phase::FRESH,
            round_result: None,
            score: Score::default(),
            source,
            link,
        };
        game.advance_to_next_player();
        Ok(game)
    }

    // === Driving ===

    /// Close the current timing window and open the next one.
    ///
    /// Returns [`GameError::GameOver`] once the outcome is decided; the
    /// state is left untouched in that case.
    pub fn tick(&mut self) -> Result<()> {
        self.ensure_running()?;
        log::trace!("tick in {:?}", self.phase);

        match self.phase {
            Phase::RoundEnding => {
                if self.round_result == Some(RoundResult::Correct) {
                    self.announce_completion();
                }
                self.advance_to_next_player();
            }
            Phase::Answered { cursor } => {
                match self.beats.get(cursor) {
                    Some(&expected) => {
                        self.phase = Phase::Awaiting {
                            position: cursor,
                            expected,
                        };
                    }
                    None => self.complete_sequence(),
                }

                if self.current_player().is_computer() && self.phase.beat_pending() {
                    self.cpu_beat();
                }
            }
            Phase::Awaiting { .. } | Phase::Extending => {
                log::debug!("{} timed out", self.current_player().name());
                self.round_result = Some(RoundResult::Timeout);
                self.player_out();
                if self.is_running() {
                    self.link.round_ended(false);
                    self.advance_to_next_player();
                }
            }
            Phase::Over => unreachable!("ensure_running rejects finished games"),
        }
        Ok(())
    }

    /// Record a player's input for the current timing window.
    ///
    /// Only the first input of a window counts; later ones are ignored.
    pub fn beat(&mut self, value: u8) -> Result<()> {
        self.ensure_running()?;
        let beat = Beat::new(value, self.settings.beat_types)?;
        self.register_beat(beat);
        Ok(())
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_running() {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }

    fn register_beat(&mut self, beat: Beat) {
        match self.phase {
            Phase::Extending => {
                let position = self.beats.len();
                self.beats.push(beat);
                log::debug!(
                    "{} extends the sequence with {} (length {})",
                    self.current_player().name(),
                    beat,
                    self.beats.len()
                );
                self.link.beat_judged(position, beat, true);
                self.record_completion();
                self.phase = Phase::RoundEnding;
            }
            Phase::Awaiting { position, expected } => {
                if beat == expected {
                    self.link.beat_judged(position, expected, true);
                    self.phase = Phase::Answered {
                        cursor: position + 1,
                    };
                } else {
                    log::debug!(
                        "{} played {} at position {}, expected {}",
                        self.current_player().name(),
                        beat,
                        position,
                        expected
                    );
                    self.link.beat_judged(position, expected, false);
                    self.round_result = Some(RoundResult::Wrong);
                    self.player_out();
                    if self.is_running() {
                        self.link.round_ended(false);
                        self.phase = Phase::RoundEnding;
                    }
                }
            }
            Phase::Answered { .. } | Phase::RoundEnding | Phase::Over => {
                log::trace!("ignoring {} outside an open window", beat);
            }
        }
    }

    /// The current player reproduced the whole sequence.
    fn complete_sequence(&mut self) {
        self.round_result = Some(RoundResult::Correct);
        if self.current_player_will_add_beat() {
            self.phase = Phase::Extending;
        } else {
            self.record_completion();
            self.announce_completion();
            self.advance_to_next_player();
        }
    }

    fn announce_completion(&mut self) {
        self.link.play_sound(SoundCue::Correct);
        self.link.round_ended(false);
    }

    /// Computer players never miss: they replay the expected beat, or append
    /// a random one when extending.
    fn cpu_beat(&mut self) {
        let beat = match self.phase {
            Phase::Extending => self.source.next_beat(self.settings.beat_types),
            Phase::Awaiting { expected, .. } => expected,
            _ => return,
        };
        self.link.computer_beat(beat);
        self.register_beat(beat);
    }

    /// Only humans score.
    fn record_completion(&mut self) {
        let id = self.current_player_id();
        if !self.roster[id].is_computer() {
            self.score = Score::new(id, self.beats.len() as u32);
            log::debug!("{} leads with {} points", self.roster[id].name(), self.score.points);
        }
    }

    fn player_out(&mut self) {
        let id = self.current_player_id();
        self.roster[id].mark_out();
        self.players_out += 1;
        self.link.play_sound(SoundCue::Fail);
        log::debug!(
            "{} is out ({} of {} contestants)",
            self.roster[id].name(),
            self.players_out,
            self.roster.contestant_count()
        );

        if let Elimination::GameOver { survivor } =
            self.mode.on_player_eliminated(&self.roster, self.players_out)
        {
            if self.score.winner.is_none() {
                self.score.winner = survivor;
            }
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        self.phase = Phase::Over;
        self.link.round_ended(true);
        match self.score.winner {
            Some(id) => log::info!(
                "Game over: {} wins with {} points",
                self.roster[id].name(),
                self.score.points
            ),
            None => log::info!("Game over: no winner"),
        }
    }

    /// Seat the next player and reset the round.
    ///
    /// The very first call seats the Beatstarter. Every later call scans the
    /// contestant slots round-robin from the one after the current player,
    /// skipping eliminated players; slot 0 is never revisited.
    fn advance_to_next_player(&mut self) {
        let next = match self.current {
            None => PlayerId::BEATSTARTER,
            Some(id) => {
                let start = id.next_contestant(self.roster.contestant_count());
                self.roster
                    .first_in_play_from(start)
                    .expect("mode rules end the game before every contestant is out")
            }
        };
        self.current = Some(next);

        let player = &self.roster[next];
        log::debug!("Turn passes to {} ({})", player.name(), next);
        self.link.input_locked(player.is_computer());
        self.phase = Phase::FRESH;
    }

    // === Queries ===

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current.unwrap_or(PlayerId::BEATSTARTER)
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.roster[self.current_player_id()]
    }

    /// Will the current player append a beat once the sequence is reproduced?
    #[must_use]
    pub fn current_player_will_add_beat(&self) -> bool {
        self.mode.will_add_beat(self.current_player())
    }

    #[must_use]
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Result of the last judged round, `None` before any.
    #[must_use]
    pub fn round_result(&self) -> Option<RoundResult> {
        self.round_result
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn settings(&self) -> DifficultySettings {
        self.settings
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn sequence_len(&self) -> usize {
        self.beats.len()
    }

    #[must_use]
    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    #[must_use]
    pub fn players(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn players_out(&self) -> usize {
        self.players_out
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The beat the open window expects, if the player is reproducing.
    #[must_use]
    pub fn expected_beat(&self) -> Option<Beat> {
        self.phase.expected()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Over
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        (!self.is_running()).then(|| GameResult::from_score(&self.score))
    }

    /// Snapshot for high-score comparison, once the game is over with a winner.
    #[must_use]
    pub fn high_score(&self) -> Option<HighScore> {
        if self.is_running() {
            return None;
        }
        let winner = self.score.winner?;
        Some(HighScore::new(self.roster[winner].name(), self.score.points))
    }

    #[must_use]
    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Tear down the game, handing back the link.
    pub fn into_link(self) -> L {
        self.link
    }
}
