//! # rust-uno
//!
//! Two-handed shedding card game engine: a human player against a scripted
//! opponent, 108 cards, color/number matching with action and wild cards.
//!
//! ## Design Principles
//!
//! 1. **One owned state**: a `GameState` value holds the whole table. It is
//!    created by `GameBuilder`, advanced by `apply_move`, and dropped. No
//!    globals.
//!
//! 2. **One turn engine**: both participants go through the same
//!    `apply_move`. The opponent's decisions come from an `OpponentPolicy`.
//!
//! 3. **Card conservation**: draw pile, discard pile and both hands always
//!    hold exactly 108 cards between them.
//!
//! ## Modules
//!
//! - `cards`: Card values, tags, and the standard deck
//! - `zones`: Draw pile, discard pile, hands, and transfers between them
//! - `core`: Participants, state, moves, RNG, configuration
//! - `effects`: Per-card effect dispatch
//! - `rules`: Legality, the turn engine, and game setup
//! - `policy`: Scripted opponents
//! - `error`: Error taxonomy
//!
//! ## Example
//!
//! ```
//! use rust_uno::{new_game_seeded, play_policy_turn, FirstMatch};
//!
//! let mut game = new_game_seeded(7).unwrap();
//! while !game.is_over() {
//!     play_policy_turn(&mut game, &FirstMatch).unwrap();
//! }
//! assert!(game.winner().is_some());
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod policy;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{build_standard_deck, Card, Color, Value, DECK_SIZE};

pub use crate::core::{
    GameConfig, GameResult, GameRng, GameRngState, GameState, Move, Participant, ParticipantMap,
    PublicView, TurnOutcome, TurnRecord,
};

pub use crate::zones::{deal, refill_from_discard, DiscardPile, DrawPile, Hand};

pub use crate::effects::Effect;

pub use crate::error::{CardError, InputError, MoveError, StructuralError};

pub use crate::rules::{is_legal, new_game, new_game_seeded, GameBuilder};

pub use crate::policy::{play_policy_turn, select_card, FirstMatch, OpponentPolicy};
