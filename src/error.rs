//! Error taxonomy.
//!
//! Three kinds of failure reach callers of the engine:
//!
//! - [`InputError`]: a malformed or unavailable move. Routine; the caller
//!   re-prompts.
//! - [`MoveError::IllegalMove`]: a well-formed card that does not match the
//!   active card. Routine; handled like an input error.
//! - [`StructuralError`]: the engine's own bookkeeping is broken (the
//!   108-card count no longer holds). Fatal; never swallowed.
//!
//! Routine errors leave the game state untouched.

use thiserror::Error;

use crate::cards::{Card, Color, Value};

/// Failure to build or parse a card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("invalid card: {color} cannot carry {value}")]
    InvalidCard { color: Color, value: Value },

    #[error("unrecognised card `{0}`")]
    Parse(String),
}

/// Violated engine invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("no cards left in the draw pile or discard pile")]
    EmptyPile,

    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),

    #[error("card count mismatch: expected {expected}, found {actual}")]
    CardCountMismatch { expected: usize, actual: usize },
}

/// Rejected move input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Card(#[from] CardError),

    #[error("{0} is not in your hand")]
    NotInHand(Card),

    #[error("{0} needs a replacement color")]
    MissingColor(Card),

    #[error("{0} cannot be chosen as the active color")]
    InvalidColor(Color),

    #[error("the game is already over")]
    GameOver,
}

/// Any error returned by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{card} does not match {active_card} (active color {active_color})")]
    IllegalMove {
        card: Card,
        active_card: Card,
        active_color: Color,
    },

    #[error(transparent)]
    Structural(#[from] StructuralError),
}

impl MoveError {
    /// Structural errors mean the game cannot safely continue.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, MoveError::Structural(_))
    }
}

impl From<CardError> for MoveError {
    fn from(err: CardError) -> Self {
        MoveError::Input(InputError::Card(err))
    }
}
