//! First-match opponent.

use crate::cards::{Card, Color};
use crate::core::GameRng;
use crate::rules::is_legal;
use crate::zones::Hand;

use super::OpponentPolicy;

/// First card in hand order that is legal on the active card.
///
/// No preference between playable cards: a wild is as good as a number.
#[must_use]
pub fn select_card(hand: &Hand, active_card: Card, active_color: Color) -> Option<Card> {
    hand.iter()
        .find(|card| is_legal(card, &active_card, active_color))
        .copied()
}

/// Naive opponent: plays the first legal card, names a random color.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatch;

impl OpponentPolicy for FirstMatch {
    fn select_card(&self, hand: &Hand, active_card: Card, active_color: Color) -> Option<Card> {
        select_card(hand, active_card, active_color)
    }

    fn choose_color(&self, _hand: &Hand, rng: &mut GameRng) -> Color {
        rng.choose(&Color::STANDARD).copied().unwrap_or(Color::Red)
    }
}
