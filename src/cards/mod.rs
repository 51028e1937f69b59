//! Card model and deck construction.
//!
//! ## Key Types
//!
//! - `Color`: red, yellow, green, blue, or wild
//! - `Value`: 0-9, draw-two, skip, reverse, wild draw-four, wild color-choice
//! - `Card`: validated `(Color, Value)` pair, doubling as its own hand key
//!
//! `build_standard_deck` yields the 108-card set the engine conserves.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Value};
pub use deck::{build_standard_deck, DECK_SIZE};
