//! Standard deck construction.
//!
//! Per standard color: one 0, two each of 1-9, two draw-two, two skip and
//! two reverse (27 cards). Plus four of each wild value. 4 x 27 + 8 = 108.

use super::card::{Card, Color, Value};

/// Total number of cards in play. Every reachable game state accounts for
/// exactly this many cards across the piles and both hands.
pub const DECK_SIZE: usize = 108;

/// Copies of each wild value.
const WILD_COPIES: usize = 4;

/// Build the full, unshuffled card set.
///
/// Cards come out grouped by color in `Color::STANDARD` order, then the wilds.
#[must_use]
pub fn build_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for color in Color::STANDARD {
        for n in 1..=9 {
            push_copies(&mut deck, Card::new_unchecked(color, Value::Number(n)), 2);
        }
        push_copies(&mut deck, Card::new_unchecked(color, Value::DrawTwo), 2);
        push_copies(&mut deck, Card::new_unchecked(color, Value::Skip), 2);
        push_copies(&mut deck, Card::new_unchecked(color, Value::Reverse), 2);
        deck.push(Card::new_unchecked(color, Value::Number(0)));
    }

    push_copies(&mut deck, Card::new_unchecked(Color::Wild, Value::WildDrawFour), WILD_COPIES);
    push_copies(&mut deck, Card::new_unchecked(Color::Wild, Value::WildColorChoice), WILD_COPIES);

    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

fn push_copies(deck: &mut Vec<Card>, card: Card, copies: usize) {
    deck.extend(std::iter::repeat(card).take(copies));
}
