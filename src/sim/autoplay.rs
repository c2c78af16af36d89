//! Autoplay driver.
//!
//! Plays games headlessly: ticks the engine like the presentation layer's
//! timer would and answers for the human contestants with a simple model of
//! how often they respond in time and how often they hit the right drum.

use crate::core::beat::Beat;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::rng::{BeatSource, GameRng};
use crate::engine::{FrontendLink, Game, NullLink};
use crate::rules::GameResult;

/// Configuration for modelled human players.
#[derive(Clone, Debug)]
pub struct AutoplayConfig {
    /// Probability that a response hits the expected drum.
    pub accuracy: f64,

    /// Probability of responding within a timing window at all.
    pub response_rate: f64,

    /// Stop driving after this many ticks, decided or not.
    pub max_ticks: usize,

    /// Seed for the player model (independent of the game's own seed).
    pub seed: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            accuracy: 0.97,
            response_rate: 0.99,
            max_ticks: 100_000,
            seed: 0,
        }
    }
}

impl AutoplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_response_rate(mut self, rate: f64) -> Self {
        self.response_rate = rate;
        self
    }

    pub fn with_max_ticks(mut self, max: usize) -> Self {
        self.max_ticks = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of one autoplayed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    /// Ticks driven.
    pub ticks: usize,

    /// `None` if `max_ticks` ran out first.
    pub result: Option<GameResult>,

    pub points: u32,
    pub sequence_len: usize,
    pub players_out: usize,
}

/// Drives games to completion.
pub struct Autoplay {
    config: AutoplayConfig,
    rng: GameRng,
}

impl Autoplay {
    pub fn new(config: AutoplayConfig) -> Self {
        let rng = GameRng::new(config.seed).for_context("autoplay");
        Self { config, rng }
    }

    /// Build a game from `config` and play it out with no frontend.
    pub fn play_config(&mut self, config: GameConfig) -> Result<MatchSummary> {
        let mut game = Game::new(config, NullLink)?;
        self.play(&mut game)
    }

    /// Play an existing game until it ends or `max_ticks` runs out.
    pub fn play<L: FrontendLink, R: BeatSource>(&mut self, game: &mut Game<L, R>) -> Result<MatchSummary> {
        let mut ticks = 0;

        while game.is_running() && ticks < self.config.max_ticks {
            game.tick()?;
            ticks += 1;

            let human_turn = game.is_running()
                && !game.current_player().is_computer()
                && game.phase().beat_pending();
            if human_turn {
                if let Some(value) = self.respond(game) {
                    game.beat(value)?;
                }
            }
        }

        log::debug!("Autoplay finished after {} ticks", ticks);

        Ok(MatchSummary {
            ticks,
            result: game.result(),
            points: game.score().points,
            sequence_len: game.sequence_len(),
            players_out: game.players_out(),
        })
    }

    /// The modelled human's input for the open window, if any.
    fn respond<L: FrontendLink, R: BeatSource>(&mut self, game: &Game<L, R>) -> Option<u8> {
        if !self.rng.gen_bool(self.config.response_rate) {
            return None;
        }

        let beat_types = game.settings().beat_types;
        match game.expected_beat() {
            Some(expected) if self.rng.gen_bool(self.config.accuracy) || beat_types < 2 => {
                Some(expected.value())
            }
            Some(expected) => {
                // Any drum but the expected one
                let offset = self.rng.gen_range(1..=beat_types - 1);
                let index = (expected.index() as u8 + offset) % beat_types;
                Beat::from_index(index, beat_types).ok().map(Beat::value)
            }
            // Extending: any drum will do
            None => Some(self.rng.gen_range(1..=beat_types)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Difficulty;

    #[test]
    fn test_perfect_players_stop_at_tick_limit() {
        let config = GameConfig::multi_player(["Ann", "Bo"]).with_seed(1);
        let mut autoplay = Autoplay::new(
            AutoplayConfig::new()
                .with_accuracy(1.0)
                .with_response_rate(1.0)
                .with_max_ticks(500),
        );

        let summary = autoplay.play_config(config).unwrap();
        assert_eq!(summary.ticks, 500);
        assert_eq!(summary.result, None);
        assert_eq!(summary.players_out, 0);
        assert!(summary.sequence_len > 3);
    }

    #[test]
    fn test_silent_player_times_out() {
        let config = GameConfig::single_player("Ann").with_difficulty(Difficulty::Medium);
        let mut autoplay = Autoplay::new(AutoplayConfig::new().with_response_rate(0.0));

        let summary = autoplay.play_config(config).unwrap();
        assert_eq!(summary.result, Some(GameResult::NoWinner));
        assert_eq!(summary.players_out, 1);
        assert_eq!(summary.sequence_len, 5);
    }

    #[test]
    fn test_inaccurate_players_finish_multi_player() {
        let config = GameConfig::multi_player(["Ann", "Bo", "Cy"]).with_seed(9);
        let mut autoplay = Autoplay::new(AutoplayConfig::new().with_accuracy(0.8).with_seed(4));

        let summary = autoplay.play_config(config).unwrap();
        assert!(matches!(summary.result, Some(GameResult::Winner(_))));
        assert_eq!(summary.players_out, 2);
    }

    #[test]
    fn test_missed_drum_eliminates_single_player() {
        for seed in 0..20 {
            let config = GameConfig::single_player("Ann").with_seed(seed);
            let mut autoplay = Autoplay::new(
                AutoplayConfig::new()
                    .with_accuracy(0.0)
                    .with_response_rate(1.0)
                    .with_seed(seed),
            );

            let summary = autoplay.play_config(config).unwrap();
            assert_eq!(summary.result, Some(GameResult::NoWinner));
            assert_eq!(summary.players_out, 1);
            assert_eq!(summary.sequence_len, 3);
        }
    }

    #[test]
    fn test_wrong_drum_is_in_range_and_never_expected() {
        let config = GameConfig::multi_player(["Ann", "Bo"]).with_seed(11);
        let mut game = Game::new(config, NullLink).unwrap();
        while game.current_player().is_computer() {
            game.tick().unwrap();
        }
        game.tick().unwrap();
        let expected = game.expected_beat().unwrap();

        let mut autoplay = Autoplay::new(
            AutoplayConfig::new()
                .with_accuracy(0.0)
                .with_response_rate(1.0),
        );
        for _ in 0..50 {
            let value = autoplay.respond(&game).unwrap();
            assert!((1..=4).contains(&value));
            assert_ne!(value, expected.value());
        }
    }

    #[test]
    fn test_autoplay_is_deterministic() {
        let run = || {
            let config = GameConfig::multi_player(["Ann", "Bo", "Cy", "Di"]).with_seed(21);
            Autoplay::new(AutoplayConfig::new().with_accuracy(0.9).with_seed(8))
                .play_config(config)
                .unwrap()
        };

        assert_eq!(run(), run());
    }
}
