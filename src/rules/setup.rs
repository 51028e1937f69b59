//! Game setup: dealing and the opening card.

use tracing::{debug, info};

use crate::cards::Card;
use crate::core::{GameConfig, GameRng, GameState, Participant};
use crate::error::StructuralError;
use crate::zones::deal;

/// Largest hand the builder accepts. Two hands of this size leave eight
/// cards to open the discard pile with.
pub const MAX_HAND_SIZE: usize = 50;

/// Builder for a new game.
///
/// ```
/// use rust_uno::core::Participant;
/// use rust_uno::rules::GameBuilder;
///
/// let state = GameBuilder::new()
///     .hand_size(7)
///     .first_turn(Participant::Opponent)
///     .build(42)
///     .unwrap();
/// assert_eq!(state.turn(), Participant::Opponent);
/// assert_eq!(state.hand_size(Participant::Player), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hand_size(mut self, size: usize) -> Self {
        assert!((1..=MAX_HAND_SIZE).contains(&size), "Hand size must be 1-{MAX_HAND_SIZE}");
        self.config.hand_size = size;
        self
    }

    #[must_use]
    pub fn first_turn(mut self, who: Participant) -> Self {
        self.config.first_turn = who;
        self
    }

    #[must_use]
    pub fn auto_play_drawn(mut self, enabled: bool) -> Self {
        self.config.auto_play_drawn = enabled;
        self
    }

    #[must_use]
    pub fn refill_threshold(mut self, threshold: usize) -> Self {
        self.config.refill_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn penalize_illegal_plays(mut self, enabled: bool) -> Self {
        self.config.penalize_illegal_plays = enabled;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(self, config: GameConfig) -> Self {
        let hand_size = config.hand_size;
        Self { config }.hand_size(hand_size)
    }

    /// Build a game with a seeded RNG.
    pub fn build(self, seed: u64) -> Result<GameState, StructuralError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Shuffle, deal each hand (player first), then turn the opening card.
    pub fn build_with_rng(self, rng: GameRng) -> Result<GameState, StructuralError> {
        let hand_size = self.config.hand_size;
        let mut state = GameState::new(self.config, rng);

        for who in Participant::BOTH {
            if !deal(&mut state.draw_pile, &mut state.hands[who], hand_size) {
                return Err(StructuralError::EmptyPile);
            }
            debug!(%who, cards = hand_size, "dealt hand");
        }

        let opening = turn_opening_card(&mut state)?;
        state.refill_if_low();
        state.check_conservation()?;

        info!(
            seed = state.rng.seed(),
            first_turn = %state.turn,
            opening = %opening,
            "new game"
        );
        Ok(state)
    }
}

/// Flip cards from the draw pile onto the discard pile until a number card
/// lands on top, and make its color active.
///
/// Fails with `EmptyPile` if no number card is left outside the hands.
fn turn_opening_card(state: &mut GameState) -> Result<Card, StructuralError> {
    let available = state
        .draw_pile
        .iter()
        .chain(state.discard_pile.iter())
        .any(|card| card.value().is_number());
    if !available {
        return Err(StructuralError::EmptyPile);
    }

    loop {
        let card = state.take_from_draw_pile()?;
        state.discard_pile.push(card);
        if card.value().is_number() {
            state.active_color = card.color();
            return Ok(card);
        }
        debug!(%card, "flipped non-number opening card");
    }
}

/// Start a default game with an OS-random seed.
pub fn new_game() -> Result<GameState, StructuralError> {
    GameBuilder::new().build_with_rng(GameRng::from_entropy())
}

/// Start a default game with a fixed seed.
pub fn new_game_seeded(seed: u64) -> Result<GameState, StructuralError> {
    GameBuilder::new().build(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    #[test]
    fn test_new_game_layout() {
        let state = new_game_seeded(42).unwrap();

        assert_eq!(state.hand_size(Participant::Player), 7);
        assert_eq!(state.hand_size(Participant::Opponent), 7);
        assert!(state.active_card().unwrap().value().is_number());
        assert_eq!(state.active_color(), state.active_card().unwrap().color());
        assert_eq!(state.card_count(), DECK_SIZE);
        assert_eq!(state.turn(), Participant::Player);
        assert_eq!(state.turn_number(), 0);
    }

    #[test]
    fn test_seeded_games_repeat() {
        let a = new_game_seeded(5).unwrap();
        let b = new_game_seeded(5).unwrap();
        assert_eq!(a.public_view(), b.public_view());
        assert_eq!(a.draw_pile(), b.draw_pile());
    }

    #[test]
    fn test_builder_options() {
        let state = GameBuilder::new()
            .hand_size(3)
            .first_turn(Participant::Opponent)
            .auto_play_drawn(false)
            .refill_threshold(20)
            .build(1)
            .unwrap();

        assert_eq!(state.hand_size(Participant::Opponent), 3);
        assert_eq!(state.turn(), Participant::Opponent);
        assert!(!state.config().auto_play_drawn);
        assert_eq!(state.config().refill_threshold, Some(20));
    }

    #[test]
    fn test_largest_hands_still_open() {
        for seed in 0..20 {
            match GameBuilder::new().hand_size(MAX_HAND_SIZE).build(seed) {
                Ok(state) => {
                    assert!(state.active_card().unwrap().value().is_number());
                    assert_eq!(state.card_count(), DECK_SIZE);
                }
                Err(err) => assert_eq!(err, StructuralError::EmptyPile),
            }
        }
    }

    #[test]
    #[should_panic(expected = "Hand size must be 1-50")]
    fn test_zero_hand_size_rejected() {
        let _ = GameBuilder::new().hand_size(0);
    }
}
