//! A participant's hand.
//!
//! Cards are grouped by their `(color, value)` key. Each group is a short
//! sequence of interchangeable copies in acquisition order; a group is
//! dropped the moment its last copy leaves, so no key ever maps to an empty
//! sequence.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::error::StructuralError;

/// Copies of one card. Two is the common case outside wilds.
type Copies = SmallVec<[Card; 2]>;

/// Multiset of cards keyed by card identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    groups: FxHashMap<Card, Copies>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card, appending to its group or starting a new one.
    pub fn add(&mut self, card: Card) {
        self.groups.entry(card).or_default().push(card);
    }

    /// Remove one copy of `card`.
    ///
    /// Returns `false`, leaving the hand untouched, if no copy is held.
    pub fn remove(&mut self, card: &Card) -> bool {
        let Some(copies) = self.groups.get_mut(card) else {
            return false;
        };
        copies.pop();
        if copies.is_empty() {
            self.groups.remove(card);
        }
        true
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.groups.contains_key(card)
    }

    /// A held copy of `card`.
    pub fn get_one(&self, card: &Card) -> Result<Card, StructuralError> {
        self.groups
            .get(card)
            .and_then(|copies| copies.first())
            .copied()
            .ok_or(StructuralError::CardNotInHand(*card))
    }

    /// Number of copies of `card` held.
    #[must_use]
    pub fn count(&self, card: &Card) -> usize {
        self.groups.get(card).map_or(0, |copies| copies.len())
    }

    /// Total cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(|copies| copies.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every physical card. All copies of a card are adjacent; the order of
    /// groups is the map's iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.groups.values().flatten()
    }

    /// Flattened card list, duplicates repeated.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.iter().copied().collect()
    }

    /// One display tag per physical card, in [`Hand::iter`] order.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.iter().map(Card::tag).collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Hand::new();
        for card in iter {
            hand.add(card);
        }
        hand
    }
}
