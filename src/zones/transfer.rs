//! Bulk card movement between piles and hands.

use tracing::debug;

use crate::core::GameRng;

use super::{DiscardPile, DrawPile, Hand};

/// Move `n` cards from the front of `pile` into `hand`.
///
/// All or nothing: if the pile holds fewer than `n` cards, nothing moves and
/// `false` is returned.
pub fn deal(pile: &mut DrawPile, hand: &mut Hand, n: usize) -> bool {
    if pile.len() < n {
        return false;
    }
    for card in pile.drain_front(n) {
        hand.add(card);
    }
    true
}

/// Recycle the discard pile into the draw pile.
///
/// Keeps the top (active) card where it is, moves every card beneath it onto
/// the back of the draw pile, then shuffles the draw pile. Returns the number
/// of cards moved. An empty discard pile is left alone and nothing is
/// shuffled; a single-card one moves nothing but the draw pile is still
/// shuffled.
pub fn refill_from_discard(discard: &mut DiscardPile, draw: &mut DrawPile, rng: &mut GameRng) -> usize {
    if discard.is_empty() {
        return 0;
    }

    let recycled = discard.take_below_top();
    let moved = recycled.len();
    draw.extend(recycled);
    draw.shuffle(rng);
    debug!(moved, draw_pile = draw.len(), "refilled draw pile from discard pile");
    moved
}
