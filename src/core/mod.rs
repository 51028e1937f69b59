//! Core engine types: participants, state, moves, RNG, configuration.
//!
//! Everything here is plain data plus bookkeeping. The rules that move cards
//! between zones during a turn live in `rules`.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, TurnOutcome, TurnRecord};
pub use config::{GameConfig, DEFAULT_HAND_SIZE};
pub use player::{Participant, ParticipantMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameResult, GameState, PublicView};
