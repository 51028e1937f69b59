//! Game rules: legality, the turn engine, and game setup.
//!
//! - `is_legal` decides whether a card may be played.
//! - `GameState::apply_move` resolves one turn for either participant.
//! - `GameBuilder` / `new_game` deal a fresh table.

pub mod engine;
pub mod setup;

pub use engine::is_legal;
pub use setup::{new_game, new_game_seeded, GameBuilder, MAX_HAND_SIZE};
