//! Property tests for card conservation.
//!
//! Whatever sequence of moves is made, the 108 cards are never created,
//! destroyed, or altered; only moved.

use proptest::prelude::*;

use rust_uno::core::{GameRng, Move, Participant};
use rust_uno::zones::{DrawPile, Hand};
use rust_uno::{
    build_standard_deck, new_game_seeded, play_policy_turn, Card, Color, FirstMatch, GameBuilder,
    MoveError, Value, DECK_SIZE,
};

fn any_card() -> impl Strategy<Value = Card> {
    prop::sample::select(build_standard_deck())
}

fn any_move() -> impl Strategy<Value = (u8, usize, usize)> {
    // (kind, card index, color index)
    (0u8..4, 0usize..64, 0usize..4)
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}

/// Every card currently on the table.
fn all_cards(state: &rust_uno::GameState) -> Vec<Card> {
    let mut cards: Vec<Card> = state.draw_pile().iter().copied().collect();
    cards.extend(state.discard_pile().iter().copied());
    for who in Participant::BOTH {
        cards.extend(state.hand(who).iter().copied());
    }
    sorted(cards)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random moves, legal or not, never change the multiset of cards.
    #[test]
    fn prop_random_moves_conserve_cards(
        seed in any::<u64>(),
        moves in prop::collection::vec(any_move(), 1..60),
    ) {
        let mut state = new_game_seeded(seed).unwrap();
        let deck = sorted(build_standard_deck());

        for (kind, card_idx, color_idx) in moves {
            if state.is_over() {
                break;
            }
            let hand = state.hand(state.turn()).cards();
            let color = Some(Color::STANDARD[color_idx]);
            let input = match kind {
                0 if !hand.is_empty() => Move::Play(hand[card_idx % hand.len()]),
                0 | 1 => Move::Draw,
                2 => Move::Pass,
                _ => match state.playable_cards(state.turn()).unwrap().first() {
                    Some(card) => Move::Play(*card),
                    None => Move::Draw,
                },
            };

            match state.apply_move(input, color) {
                Ok(_) | Err(MoveError::IllegalMove { .. }) => {}
                Err(e) => prop_assert!(false, "unexpected error {e}"),
            }
            prop_assert_eq!(state.card_count(), DECK_SIZE);
        }

        prop_assert_eq!(all_cards(&state), deck);
    }

    /// Policy self-play conserves cards turn by turn.
    #[test]
    fn prop_self_play_conserves_cards(seed in any::<u64>(), hand_size in 1usize..=20) {
        let mut state = GameBuilder::new()
            .hand_size(hand_size)
            .refill_threshold(20)
            .build(seed)
            .unwrap();

        while !state.is_over() && state.turn_number() < 500 {
            play_policy_turn(&mut state, &FirstMatch).unwrap();
            prop_assert_eq!(state.check_conservation(), Ok(()));
        }
    }

    /// Shuffling reorders without adding, removing, or changing cards.
    #[test]
    fn prop_shuffle_preserves_multiset(seed in any::<u64>(), len in 0usize..=DECK_SIZE) {
        let cards: Vec<Card> = build_standard_deck().into_iter().take(len).collect();
        let mut pile = DrawPile::from_cards(cards.clone());
        let mut rng = GameRng::new(seed);

        pile.shuffle(&mut rng);

        prop_assert_eq!(pile.len(), len);
        prop_assert_eq!(sorted(pile.iter().copied().collect()), sorted(cards));
    }

    /// Adding then removing the same card restores the hand.
    #[test]
    fn prop_hand_add_remove_round_trip(
        initial in prop::collection::vec(any_card(), 0..15),
        extra in any_card(),
    ) {
        let mut hand: Hand = initial.iter().copied().collect();
        let before = hand.clone();

        hand.add(extra);
        prop_assert!(hand.remove(&extra));
        prop_assert_eq!(&hand, &before);
    }

    /// Removing an absent card is a no-op.
    #[test]
    fn prop_remove_absent_is_noop(initial in prop::collection::vec(any_card(), 0..15)) {
        let absent = Card::new(Color::Blue, Value::Number(0)).unwrap();
        let mut hand: Hand = initial.iter().copied().filter(|c| *c != absent).collect();
        let before = hand.clone();

        prop_assert!(!hand.remove(&absent));
        prop_assert_eq!(&hand, &before);
    }
}
