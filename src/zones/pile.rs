//! Draw pile (FIFO) and discard pile (LIFO).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;
use crate::core::GameRng;
use crate::error::StructuralError;

/// Face-down supply. Cards leave from the front and arrive at the back.
///
/// Backed by a ring buffer, so both ends are O(1) amortized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: VecDeque<Card>,
}

impl DrawPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pile holding `cards`, first element at the front.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    pub fn enqueue(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Take the front card.
    pub fn dequeue(&mut self) -> Result<Card, StructuralError> {
        self.cards.pop_front().ok_or(StructuralError::EmptyPile)
    }

    /// Remove the first `n` cards. Callers check `len() >= n` first.
    pub(crate) fn drain_front(&mut self, n: usize) -> impl Iterator<Item = Card> + '_ {
        self.cards.drain(..n)
    }

    /// Look at the front card without taking it.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Shuffle the cards currently in the pile.
    ///
    /// Only the live cards are permuted; spare buffer capacity is untouched.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
        trace!(cards = self.cards.len(), "draw pile shuffled");
    }

    /// Front-to-back iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Extend<Card> for DrawPile {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

/// Face-up pile of played cards. The top card is the active card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    /// Bottom first, top last.
    cards: Vec<Card>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The most recently played card.
    pub fn peek_top(&self) -> Result<Card, StructuralError> {
        self.cards.last().copied().ok_or(StructuralError::EmptyPile)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Remove every card except the top one, returned top-most first.
    ///
    /// Empty and single-card piles yield nothing.
    pub fn take_below_top(&mut self) -> Vec<Card> {
        let below = self.cards.len().saturating_sub(1);
        let mut taken: Vec<Card> = self.cards.drain(..below).collect();
        taken.reverse();
        taken
    }

    /// Bottom-to-top iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
