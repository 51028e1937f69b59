//! Moves, turn outcomes, and the turn history record.
//!
//! A `Move` is what the acting participant asks for. The engine answers with
//! a `TurnOutcome` describing what actually happened, and appends both to the
//! game's history as a `TurnRecord`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Participant;
use crate::cards::{Card, Color};
use crate::effects::Effect;
use crate::error::CardError;

/// A move request from the acting participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Play this card from hand.
    Play(Card),
    /// No playable card: draw one, and play it if it matches.
    Draw,
    /// Take one card as a penalty and give up the turn.
    Pass,
    /// Abandon the game.
    Quit,
}

impl Move {
    /// Parse a card tag into a play.
    pub fn play(tag: &str) -> Result<Self, CardError> {
        tag.parse().map(Move::Play)
    }
}

impl FromStr for Move {
    type Err = CardError;

    /// `draw`, `pass`, `quit`, or a card tag such as `red 7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draw" | "no card" => Ok(Move::Draw),
            "pass" | "skip" => Ok(Move::Pass),
            "quit" => Ok(Move::Quit),
            _ => Move::play(s),
        }
    }
}

/// What a resolved move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Who acted.
    pub actor: Participant,

    /// Card moved onto the discard pile, if any.
    pub played: Option<Card>,

    /// Card the actor drew this turn, if any. Auto-played draws appear in
    /// both `drawn` and `played`.
    pub drawn: Option<Card>,

    /// Effect of the played card.
    pub effect: Option<Effect>,

    /// Cards the other participant was made to draw.
    pub penalty: usize,

    /// Color the next play must match.
    pub active_color: Color,

    /// Whose turn it is now.
    pub next_turn: Participant,

    /// The actor is down to a single card. Display only.
    pub last_card: bool,

    /// Set when this move ended the game with a winner.
    pub winner: Option<Participant>,
}

/// A resolved turn in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn counter.
    pub turn: u32,
    /// The move as requested.
    pub action: Move,
    /// Replacement color supplied with the move.
    pub color: Option<Color>,
    pub outcome: TurnOutcome,
}
