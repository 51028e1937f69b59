//! Participants and per-participant data storage.
//!
//! ## Participant
//!
//! The game is always exactly two-handed: the human `Player` and the
//! scripted `Opponent`.
//!
//! ## ParticipantMap
//!
//! One value per participant, indexable by `Participant`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    #[default]
    Player,
    Opponent,
}

impl Participant {
    /// Both participants, player first.
    pub const BOTH: [Participant; 2] = [Participant::Player, Participant::Opponent];

    /// The participant across the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Participant::Player => Participant::Opponent,
            Participant::Opponent => Participant::Player,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Player => f.write_str("player"),
            Participant::Opponent => f.write_str("opponent"),
        }
    }
}

/// Per-participant data storage.
///
/// ## Example
///
/// ```
/// use rust_uno::core::{Participant, ParticipantMap};
///
/// let mut scores: ParticipantMap<u32> = ParticipantMap::new(|_| 0);
/// scores[Participant::Opponent] += 3;
/// assert_eq!(scores[Participant::Player], 0);
/// assert_eq!(scores[Participant::Opponent], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantMap<T> {
    player: T,
    opponent: T,
}

impl<T> ParticipantMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Participant) -> T) -> Self {
        Self {
            player: factory(Participant::Player),
            opponent: factory(Participant::Opponent),
        }
    }

    /// Get a reference to a participant's data.
    #[must_use]
    pub fn get(&self, who: Participant) -> &T {
        match who {
            Participant::Player => &self.player,
            Participant::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a participant's data.
    pub fn get_mut(&mut self, who: Participant) -> &mut T {
        match who {
            Participant::Player => &mut self.player,
            Participant::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over (Participant, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Participant, &T)> {
        [
            (Participant::Player, &self.player),
            (Participant::Opponent, &self.opponent),
        ]
        .into_iter()
    }

    /// Map each entry to a new value.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> ParticipantMap<U> {
        ParticipantMap {
            player: f(&self.player),
            opponent: f(&self.opponent),
        }
    }
}

impl<T> Index<Participant> for ParticipantMap<T> {
    type Output = T;

    fn index(&self, who: Participant) -> &Self::Output {
        self.get(who)
    }
}

impl<T> IndexMut<Participant> for ParticipantMap<T> {
    fn index_mut(&mut self, who: Participant) -> &mut Self::Output {
        self.get_mut(who)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other() {
        assert_eq!(Participant::Player.other(), Participant::Opponent);
        assert_eq!(Participant::Opponent.other(), Participant::Player);
    }

    #[test]
    fn test_map_indexing() {
        let mut map = ParticipantMap::new(|p| if p == Participant::Player { 1 } else { 2 });
        assert_eq!(map[Participant::Player], 1);
        assert_eq!(map[Participant::Opponent], 2);

        map[Participant::Player] = 10;
        assert_eq!(*map.get(Participant::Player), 10);
    }

    #[test]
    fn test_iter_and_map() {
        let map = ParticipantMap::new(|_| 3);
        let doubled = map.map(|v| v * 2);
        let collected: Vec<_> = doubled.iter().collect();
        assert_eq!(
            collected,
            vec![(Participant::Player, &6), (Participant::Opponent, &6)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Participant::Player.to_string(), "player");
        assert_eq!(Participant::Opponent.to_string(), "opponent");
    }
}
