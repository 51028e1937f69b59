//! Card locations: the two shared piles and the participants' hands.
//!
//! ## Key Types
//!
//! - `DrawPile`: face-down FIFO supply
//! - `DiscardPile`: face-up LIFO pile whose top card is the active card
//! - `Hand`: multiset of cards keyed by card identity
//!
//! `deal` and `refill_from_discard` are the only bulk movements. Neither
//! creates nor destroys cards.

pub mod hand;
pub mod pile;
pub mod transfer;

pub use hand::Hand;
pub use pile::{DiscardPile, DrawPile};
pub use transfer::{deal, refill_from_discard};
