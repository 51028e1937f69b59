//! Turn engine.
//!
//! `GameState::apply_move` is the single entry point that advances a game.
//! The same code path serves both participants; only the source of the move
//! differs (human input or an `OpponentPolicy`).
//!
//! ## Turn protocol
//!
//! 1. Validate the request. Anything malformed, unavailable or illegal is
//!    rejected before the state is touched.
//! 2. A legal play moves the card to the discard pile, sets the active color
//!    and dispatches the card's [`Effect`].
//! 3. A draw takes one card (refilling from the discard pile if needed) and
//!    plays it straight away when it matches and auto-play is on.
//! 4. An emptied hand ends the game with that participant as winner.

use tracing::{debug, info};

use crate::cards::{Card, Color};
use crate::core::{GameResult, GameState, Move, Participant, TurnOutcome, TurnRecord};
use crate::effects::Effect;
use crate::error::{InputError, MoveError, StructuralError};

/// Can `card` be played on `active_card` while `active_color` is in force?
///
/// Legal iff the colors match, the values match, or the card is wild. Two
/// action cards of the same kind match each other regardless of color.
#[must_use]
pub fn is_legal(card: &Card, active_card: &Card, active_color: Color) -> bool {
    card.color() == active_color || card.value() == active_card.value() || card.is_wild()
}

impl GameState {
    /// Legality of `card` against the current discard pile.
    pub fn is_legal_play(&self, card: &Card) -> Result<bool, StructuralError> {
        let active_card = self.active_card()?;
        Ok(is_legal(card, &active_card, self.active_color))
    }

    /// Cards in `who`'s hand that could be played right now, in hand order.
    pub fn playable_cards(&self, who: Participant) -> Result<Vec<Card>, StructuralError> {
        let active_card = self.active_card()?;
        Ok(self.hands[who]
            .iter()
            .filter(|card| is_legal(card, &active_card, self.active_color))
            .copied()
            .collect())
    }

    /// Resolve one move for the participant whose turn it is.
    ///
    /// `replacement_color` names the new active color when a wild card is
    /// played, including a wild drawn and auto-played by [`Move::Draw`]. It
    /// is ignored otherwise.
    ///
    /// Input and illegal-move errors leave the state untouched. A
    /// [`MoveError::Structural`] error means the card count no longer adds
    /// up and the game must not continue.
    pub fn apply_move(
        &mut self,
        input: Move,
        replacement_color: Option<Color>,
    ) -> Result<TurnOutcome, MoveError> {
        if self.is_over() {
            return Err(InputError::GameOver.into());
        }
        if let Some(color) = replacement_color {
            if color.is_wild() {
                return Err(InputError::InvalidColor(color).into());
            }
        }

        let actor = self.turn;
        let mut outcome = TurnOutcome {
            actor,
            played: None,
            drawn: None,
            effect: None,
            penalty: 0,
            active_color: self.active_color,
            next_turn: actor,
            last_card: false,
            winner: None,
        };

        match input {
            Move::Play(card) => {
                if !self.hands[actor].contains(&card) {
                    return Err(InputError::NotInHand(card).into());
                }
                if card.is_wild() && replacement_color.is_none() {
                    return Err(InputError::MissingColor(card).into());
                }
                let active_card = self.active_card()?;
                if is_legal(&card, &active_card, self.active_color) {
                    self.resolve_play(actor, card, replacement_color, &mut outcome)?;
                } else if self.config.penalize_illegal_plays {
                    debug!(%actor, %card, "illegal play turned into a draw");
                    let auto_play = self.config.auto_play_drawn;
                    self.resolve_draw(actor, replacement_color, auto_play, &mut outcome)?;
                } else {
                    return Err(MoveError::IllegalMove {
                        card,
                        active_card,
                        active_color: self.active_color,
                    });
                }
            }
            Move::Draw => {
                let auto_play = self.config.auto_play_drawn;
                self.resolve_draw(actor, replacement_color, auto_play, &mut outcome)?;
            }
            Move::Pass => self.resolve_draw(actor, None, false, &mut outcome)?,
            Move::Quit => self.result = Some(GameResult::Quit),
        }

        self.turn_number += 1;
        outcome.active_color = self.active_color;
        outcome.next_turn = self.turn;
        outcome.last_card = self.has_last_card(actor);
        outcome.winner = self.winner();

        self.history.push_back(TurnRecord {
            turn: self.turn_number,
            action: input,
            color: replacement_color,
            outcome: outcome.clone(),
        });

        debug!(
            turn = self.turn_number,
            %actor,
            action = ?input,
            played = ?outcome.played,
            drawn = ?outcome.drawn,
            active_color = %self.active_color,
            next = %self.turn,
            "turn resolved"
        );
        match self.result {
            Some(GameResult::Winner(winner)) => {
                info!(%winner, turns = self.turn_number, "game over");
            }
            Some(GameResult::Quit) => info!(%actor, turns = self.turn_number, "game quit"),
            None => {}
        }

        debug_assert!(
            self.check_conservation().is_ok(),
            "card count broken after turn {}",
            self.turn_number
        );

        if !self.is_over() {
            self.refill_if_low();
        }
        Ok(outcome)
    }

    /// Move a legal card from `actor`'s hand to the discard pile and apply
    /// its effect.
    fn resolve_play(
        &mut self,
        actor: Participant,
        card: Card,
        replacement_color: Option<Color>,
        outcome: &mut TurnOutcome,
    ) -> Result<(), MoveError> {
        let effect = Effect::of(card.value());
        let next_color = if effect.needs_color() {
            replacement_color.ok_or(InputError::MissingColor(card))?
        } else {
            card.color()
        };

        if !self.hands[actor].remove(&card) {
            return Err(StructuralError::CardNotInHand(card).into());
        }
        self.discard_pile.push(card);
        self.active_color = next_color;

        let penalty = effect.penalty();
        if penalty > 0 {
            self.draw_many(actor.other(), penalty)?;
        }

        self.turn = if effect.keeps_turn() { actor } else { actor.other() };
        if self.hands[actor].is_empty() {
            self.result = Some(GameResult::Winner(actor));
        }

        outcome.played = Some(card);
        outcome.effect = Some(effect);
        outcome.penalty = penalty;
        Ok(())
    }

    /// Draw one card for `actor`, play it if allowed and legal, otherwise end
    /// the turn.
    fn resolve_draw(
        &mut self,
        actor: Participant,
        replacement_color: Option<Color>,
        auto_play: bool,
        outcome: &mut TurnOutcome,
    ) -> Result<(), MoveError> {
        let card = self.draw_one(actor)?;
        outcome.drawn = Some(card);

        // A drawn wild without a color to name stays in hand.
        let playable = auto_play
            && self.is_legal_play(&card)?
            && (!card.is_wild() || replacement_color.is_some());
        if playable {
            self.resolve_play(actor, card, replacement_color, outcome)
        } else {
            self.turn = actor.other();
            Ok(())
        }
    }
}
