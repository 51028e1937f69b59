//! Game state.
//!
//! ## GameState
//!
//! The full table: both hands, the draw pile, the discard pile, whose turn it
//! is, the active color, the result once the game ends, the turn history and
//! the RNG. One value owns everything; callers create it with
//! [`crate::rules::GameBuilder`], drive it with `apply_move`, and drop it.
//!
//! ## PublicView
//!
//! What a renderer for the human player may show: sizes, the active card and
//! color, and the player's own hand. The opponent's cards stay hidden.
//!
//! ## Card conservation
//!
//! `draw pile + discard pile + both hands == DECK_SIZE` before and after every
//! operation. `check_conservation` verifies it; the engine asserts it in debug
//! builds after every move.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::TurnRecord;
use super::config::GameConfig;
use super::player::{Participant, ParticipantMap};
use super::rng::GameRng;
use crate::cards::{build_standard_deck, Card, Color, DECK_SIZE};
use crate::error::StructuralError;
use crate::zones::{deal, refill_from_discard, DiscardPile, DrawPile, Hand};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// This participant emptied their hand.
    Winner(Participant),
    /// The game was abandoned.
    Quit,
}

impl GameResult {
    /// Check if a participant won.
    #[must_use]
    pub fn is_winner(&self, who: Participant) -> bool {
        matches!(self, GameResult::Winner(p) if *p == who)
    }
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) hands: ParticipantMap<Hand>,
    pub(crate) draw_pile: DrawPile,
    pub(crate) discard_pile: DiscardPile,
    pub(crate) turn: Participant,
    pub(crate) active_color: Color,
    pub(crate) result: Option<GameResult>,
    pub(crate) turn_number: u32,
    pub(crate) history: Vector<TurnRecord>,

    /// Deterministic RNG for shuffles and scripted color choices.
    pub rng: GameRng,
}

impl GameState {
    /// Fresh table: empty hands, empty discard pile, and the full deck
    /// shuffled into the draw pile.
    ///
    /// The active color is a placeholder until the opening card is turned;
    /// [`crate::rules::GameBuilder`] does the dealing and the opening flip.
    #[must_use]
    pub fn new(config: GameConfig, mut rng: GameRng) -> Self {
        let mut draw_pile = DrawPile::from_cards(build_standard_deck());
        draw_pile.shuffle(&mut rng);

        Self {
            turn: config.first_turn,
            config,
            hands: ParticipantMap::default(),
            draw_pile,
            discard_pile: DiscardPile::new(),
            active_color: Color::Wild,
            result: None,
            turn_number: 0,
            history: Vector::new(),
            rng,
        }
    }

    /// Assemble a state from explicit parts, e.g. a prepared position.
    ///
    /// Fails with `CardCountMismatch` unless the parts hold exactly
    /// `DECK_SIZE` cards between them.
    pub fn from_parts(
        config: GameConfig,
        hands: ParticipantMap<Hand>,
        draw_pile: DrawPile,
        discard_pile: DiscardPile,
        turn: Participant,
        active_color: Color,
        rng: GameRng,
    ) -> Result<Self, StructuralError> {
        let state = Self {
            config,
            hands,
            draw_pile,
            discard_pile,
            turn,
            active_color,
            result: None,
            turn_number: 0,
            history: Vector::new(),
            rng,
        };
        state.check_conservation()?;
        Ok(state)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn hand(&self, who: Participant) -> &Hand {
        &self.hands[who]
    }

    #[must_use]
    pub fn hand_size(&self, who: Participant) -> usize {
        self.hands[who].len()
    }

    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Participant {
        self.turn
    }

    /// Number of resolved turns.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The color the next play must match.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Top of the discard pile.
    pub fn active_card(&self) -> Result<Card, StructuralError> {
        self.discard_pile.peek_top()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn winner(&self) -> Option<Participant> {
        match self.result {
            Some(GameResult::Winner(who)) => Some(who),
            _ => None,
        }
    }

    /// Down to one card. Display only; no rule depends on it.
    #[must_use]
    pub fn has_last_card(&self, who: Participant) -> bool {
        self.hands[who].len() == 1
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Invariants ===

    /// Cards currently accounted for across both piles and both hands.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.hands.iter().map(|(_, hand)| hand.len()).sum::<usize>()
    }

    pub fn check_conservation(&self) -> Result<(), StructuralError> {
        let actual = self.card_count();
        if actual == DECK_SIZE {
            Ok(())
        } else {
            Err(StructuralError::CardCountMismatch {
                expected: DECK_SIZE,
                actual,
            })
        }
    }

    // === Lifecycle ===

    /// External quit signal. No effect once the game is over.
    pub fn quit(&mut self) {
        if self.result.is_none() {
            self.result = Some(GameResult::Quit);
        }
    }

    // === Card movement ===

    /// Refill the draw pile from the discard pile. Returns cards moved.
    pub(crate) fn refill(&mut self) -> usize {
        refill_from_discard(&mut self.discard_pile, &mut self.draw_pile, &mut self.rng)
    }

    /// Apply the configured low-water refill, if any.
    pub(crate) fn refill_if_low(&mut self) {
        if let Some(threshold) = self.config.refill_threshold {
            if self.draw_pile.len() < threshold {
                self.refill();
            }
        }
    }

    /// Take the front card of the draw pile, refilling first if it is empty.
    pub(crate) fn take_from_draw_pile(&mut self) -> Result<Card, StructuralError> {
        if self.draw_pile.is_empty() {
            self.refill();
        }
        self.draw_pile.dequeue()
    }

    /// Draw one card into `who`'s hand.
    pub(crate) fn draw_one(&mut self, who: Participant) -> Result<Card, StructuralError> {
        let card = self.take_from_draw_pile()?;
        self.hands[who].add(card);
        debug!(%who, %card, "drew a card");
        Ok(card)
    }

    /// Draw `n` cards into `who`'s hand, all at once.
    pub(crate) fn draw_many(&mut self, who: Participant, n: usize) -> Result<(), StructuralError> {
        if self.draw_pile.len() < n {
            self.refill();
        }
        if !deal(&mut self.draw_pile, &mut self.hands[who], n) {
            return Err(StructuralError::EmptyPile);
        }
        debug!(%who, n, "drew penalty cards");
        Ok(())
    }

    // === Views ===

    /// Snapshot for rendering to the human player.
    #[must_use]
    pub fn public_view(&self) -> PublicView {
        PublicView {
            turn_number: self.turn_number,
            turn: self.turn,
            active_card: self.discard_pile.peek_top().ok(),
            active_color: self.active_color,
            player_hand: self.hands[Participant::Player].tags(),
            hand_sizes: self.hands.map(Hand::len),
            last_card: self.hands.map(|hand| hand.len() == 1),
            draw_pile_size: self.draw_pile.len(),
            discard_pile_size: self.discard_pile.len(),
            result: self.result,
        }
    }
}

/// Observable game information for the human player's display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicView {
    pub turn_number: u32,
    pub turn: Participant,
    pub active_card: Option<Card>,
    pub active_color: Color,
    /// The player's own cards as tags.
    pub player_hand: Vec<String>,
    pub hand_sizes: ParticipantMap<usize>,
    pub last_card: ParticipantMap<bool>,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    pub result: Option<GameResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Value;

    #[test]
    fn test_new_state_holds_full_shuffled_deck() {
        let state = GameState::new(GameConfig::default(), GameRng::new(42));

        assert_eq!(state.draw_pile().len(), DECK_SIZE);
        assert!(state.discard_pile().is_empty());
        assert!(state.hand(Participant::Player).is_empty());
        assert!(state.hand(Participant::Opponent).is_empty());
        assert!(!state.is_over());
        assert_eq!(state.check_conservation(), Ok(()));

        let unshuffled = build_standard_deck();
        let shuffled: Vec<Card> = state.draw_pile().iter().copied().collect();
        assert_ne!(shuffled, unshuffled);
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = GameState::new(GameConfig::default(), GameRng::new(7));
        let b = GameState::new(GameConfig::default(), GameRng::new(7));
        assert_eq!(a.draw_pile(), b.draw_pile());
    }

    #[test]
    fn test_from_parts_checks_card_count() {
        let result = GameState::from_parts(
            GameConfig::default(),
            ParticipantMap::default(),
            DrawPile::from_cards(build_standard_deck()[1..].to_vec()),
            DiscardPile::new(),
            Participant::Player,
            Color::Red,
            GameRng::new(1),
        );

        assert_eq!(
            result.err(),
            Some(StructuralError::CardCountMismatch {
                expected: DECK_SIZE,
                actual: DECK_SIZE - 1,
            })
        );
    }

    #[test]
    fn test_draw_one_refills_empty_pile() {
        let deck = build_standard_deck();
        let mut discard = DiscardPile::new();
        for card in &deck {
            discard.push(*card);
        }
        let top = discard.peek_top().unwrap();
        let mut state = GameState::from_parts(
            GameConfig::default(),
            ParticipantMap::default(),
            DrawPile::new(),
            discard,
            Participant::Player,
            top.color(),
            GameRng::new(1),
        )
        .unwrap();

        state.draw_one(Participant::Player).unwrap();

        assert_eq!(state.hand_size(Participant::Player), 1);
        assert_eq!(state.discard_pile().len(), 1);
        assert_eq!(state.active_card(), Ok(top));
        assert_eq!(state.draw_pile().len(), DECK_SIZE - 2);
        assert_eq!(state.check_conservation(), Ok(()));
    }

    #[test]
    fn test_draw_many_fails_when_supply_exhausted() {
        // Everything but two cards sits in the player's hand.
        let deck = build_standard_deck();
        let hand: Hand = deck[2..].iter().copied().collect();
        let mut discard = DiscardPile::new();
        discard.push(deck[0]);
        let mut state = GameState::from_parts(
            GameConfig::default(),
            ParticipantMap::new(|p| if p == Participant::Player { hand.clone() } else { Hand::new() }),
            DrawPile::from_cards(vec![deck[1]]),
            discard,
            Participant::Player,
            Color::Red,
            GameRng::new(1),
        )
        .unwrap();

        assert_eq!(
            state.draw_many(Participant::Opponent, 2),
            Err(StructuralError::EmptyPile)
        );
        assert_eq!(state.hand_size(Participant::Opponent), 0);
        assert_eq!(state.check_conservation(), Ok(()));
    }

    #[test]
    fn test_quit_and_result() {
        let mut state = GameState::new(GameConfig::default(), GameRng::new(1));
        state.quit();
        assert!(state.is_over());
        assert_eq!(state.result(), Some(GameResult::Quit));
        assert_eq!(state.winner(), None);

        assert!(GameResult::Winner(Participant::Opponent).is_winner(Participant::Opponent));
        assert!(!GameResult::Quit.is_winner(Participant::Player));
    }

    #[test]
    fn test_public_view_hides_opponent_cards() {
        let deck = build_standard_deck();
        let red7 = Card::new(Color::Red, Value::Number(7)).unwrap();
        let mut rest: Vec<Card> = deck.clone();
        let idx = rest.iter().position(|c| *c == red7).unwrap();
        rest.remove(idx);
        let opponent_cards: Hand = rest.drain(..3).collect();
        let top = rest.remove(0);
        let mut discard = DiscardPile::new();
        discard.push(top);

        let state = GameState::from_parts(
            GameConfig::default(),
            ParticipantMap::new(|p| match p {
                Participant::Player => Hand::from_iter([red7]),
                Participant::Opponent => opponent_cards.clone(),
            }),
            DrawPile::from_cards(rest),
            discard,
            Participant::Opponent,
            top.color(),
            GameRng::new(1),
        )
        .unwrap();

        let view = state.public_view();
        assert_eq!(view.player_hand, vec!["red 7".to_string()]);
        assert_eq!(view.hand_sizes[Participant::Opponent], 3);
        assert!(view.last_card[Participant::Player]);
        assert!(!view.last_card[Participant::Opponent]);
        assert_eq!(view.active_card, Some(top));
        assert_eq!(view.turn, Participant::Opponent);

        let json = serde_json::to_string(&view).unwrap();
        let back: PublicView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
