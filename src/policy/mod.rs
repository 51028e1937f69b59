//! Scripted opponents.
//!
//! ## Key Types
//!
//! - `OpponentPolicy`: picks a card to play and a color to name
//! - `FirstMatch`: the first legal card in hand order, colors uniformly at
//!   random
//! - `play_policy_turn`: runs one turn of a `GameState` with a policy

mod first_match;

pub use first_match::{select_card, FirstMatch};

use crate::cards::{Card, Color};
use crate::core::{GameRng, GameState, Move, TurnOutcome};
use crate::error::{InputError, MoveError};
use crate::zones::Hand;

/// Decision-making for a non-human participant.
pub trait OpponentPolicy {
    /// Choose a card from `hand` to play on `active_card`.
    ///
    /// Returns `None` when nothing in the hand is playable; the caller then
    /// takes the draw branch.
    fn select_card(&self, hand: &Hand, active_card: Card, active_color: Color) -> Option<Card>;

    /// Name the new active color after a wild. Must not return `Color::Wild`.
    fn choose_color(&self, hand: &Hand, rng: &mut GameRng) -> Color;
}

/// Play the current participant's turn with `policy`.
///
/// A replacement color is chosen for a wild play, and always for a draw,
/// since the drawn card may turn out to be a wild that gets auto-played.
pub fn play_policy_turn<P: OpponentPolicy + ?Sized>(
    state: &mut GameState,
    policy: &P,
) -> Result<TurnOutcome, MoveError> {
    if state.is_over() {
        return Err(InputError::GameOver.into());
    }

    let actor = state.turn;
    let active_card = state.active_card()?;
    let hand = &state.hands[actor];

    let (input, color) = match policy.select_card(hand, active_card, state.active_color) {
        Some(card) => {
            let color = card.is_wild().then(|| policy.choose_color(hand, &mut state.rng));
            (Move::Play(card), color)
        }
        None => (Move::Draw, Some(policy.choose_color(hand, &mut state.rng))),
    };

    state.apply_move(input, color)
}
