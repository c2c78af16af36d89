//! Players and the per-game roster.
//!
//! ## PlayerId
//!
//! Index into the roster. Slot 0 always holds the Beatstarter, the computer
//! player that opens the game; slots `1..=contestants` are cycled round-robin.
//!
//! ## Roster
//!
//! Fixed-size list of players backed by a `SmallVec`, since a game never has
//! more than a handful of seats.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Name of the computer player that opens every game.
pub const BEATSTARTER_NAME: &str = "Beatstarter";

/// Name of the computer opponent in single-player games.
pub const REPEATER_NAME: &str = "Repeater";

/// Roster slot identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The Beatstarter's slot.
    pub const BEATSTARTER: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Next contestant slot in round-robin order over `1..=contestants`.
    ///
    /// ```
    /// use catch_the_beat::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::BEATSTARTER.next_contestant(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next_contestant(3), PlayerId::new(3));
    /// assert_eq!(PlayerId::new(3).next_contestant(3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn next_contestant(self, contestants: usize) -> PlayerId {
        PlayerId(((self.index() % contestants) + 1) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seat in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    is_computer: bool,
    is_out: bool,
}

impl Player {
    /// Create a human player.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_computer: false,
            is_out: false,
        }
    }

    /// Create a computer player.
    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_computer: true,
            is_out: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    #[must_use]
    pub fn is_out(&self) -> bool {
        self.is_out
    }

    /// Eliminate this player. Irreversible.
    pub fn mark_out(&mut self) {
        self.is_out = true;
    }
}

/// All players of one game, Beatstarter first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SmallVec<[Player; 4]>,
}

impl Roster {
    /// Beatstarter followed by one human per name.
    pub fn multi_player<S: AsRef<str>>(names: &[S]) -> Self {
        let mut players = SmallVec::with_capacity(names.len() + 1);
        players.push(Player::computer(BEATSTARTER_NAME));
        players.extend(names.iter().map(|n| Player::human(n.as_ref())));
        Self { players }
    }

    /// Beatstarter, the human, and the computer Repeater.
    pub fn single_player(name: impl Into<String>) -> Self {
        let mut players = SmallVec::new();
        players.push(Player::computer(BEATSTARTER_NAME));
        players.push(Player::human(name));
        players.push(Player::computer(REPEATER_NAME));
        Self { players }
    }

    /// Number of seats, Beatstarter included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Number of round-robin seats (everyone but the Beatstarter).
    #[must_use]
    pub fn contestant_count(&self) -> usize {
        self.players.len() - 1
    }

    /// Get a player by slot.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Iterate over (PlayerId, &Player) pairs, Beatstarter included.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Iterate over contestants only.
    pub fn contestants(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.iter().skip(1)
    }

    /// Contestants that have not been eliminated.
    pub fn survivors(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.contestants().filter(|(_, p)| !p.is_out())
    }

    /// First non-eliminated contestant at or after `start` in round-robin order.
    #[must_use]
    pub fn first_in_play_from(&self, start: PlayerId) -> Option<PlayerId> {
        let contestants = self.contestant_count();
        let offset = start.index().saturating_sub(1);
        (0..contestants)
            .map(|k| PlayerId((((offset + k) % contestants) + 1) as u8))
            .find(|&id| !self[id].is_out())
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        &mut self.players[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
        assert_eq!(PlayerId::BEATSTARTER.index(), 0);
    }

    #[test]
    fn test_next_contestant_never_returns_beatstarter() {
        for contestants in 1..=10usize {
            for slot in 0..=contestants as u8 {
                let next = PlayerId::new(slot).next_contestant(contestants);
                assert!(next.index() >= 1 && next.index() <= contestants);
            }
        }
    }

    #[test]
    fn test_multi_player_roster() {
        let roster = Roster::multi_player(&["Ann", "Bo", "Cy"]);

        assert_eq!(roster.contestant_count(), 3);
        assert_eq!(roster[PlayerId::BEATSTARTER].name(), BEATSTARTER_NAME);
        assert!(roster[PlayerId::BEATSTARTER].is_computer());
        assert_eq!(roster[PlayerId::new(2)].name(), "Bo");
        assert!(roster.contestants().all(|(_, p)| !p.is_computer()));
    }

    #[test]
    fn test_single_player_roster() {
        let roster = Roster::single_player("Ann");

        assert_eq!(roster.contestant_count(), 2);
        assert!(!roster[PlayerId::new(1)].is_computer());
        assert!(roster[PlayerId::new(2)].is_computer());
        assert_eq!(roster[PlayerId::new(2)].name(), REPEATER_NAME);
    }

    #[test]
    fn test_first_in_play_skips_eliminated() {
        let mut roster = Roster::multi_player(&["Ann", "Bo", "Cy"]);
        roster[PlayerId::new(2)].mark_out();

        assert_eq!(roster.first_in_play_from(PlayerId::new(2)), Some(PlayerId::new(3)));
        assert_eq!(roster.first_in_play_from(PlayerId::new(1)), Some(PlayerId::new(1)));

        roster[PlayerId::new(3)].mark_out();
        assert_eq!(roster.first_in_play_from(PlayerId::new(2)), Some(PlayerId::new(1)));
        assert_eq!(roster.survivors().count(), 1);

        roster[PlayerId::new(1)].mark_out();
        assert_eq!(roster.first_in_play_from(PlayerId::new(1)), None);
    }

    #[test]
    fn test_roster_serialization() {
        let roster = Roster::multi_player(&["Ann", "Bo"]);
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }
}
