//! Game configuration.
//!
//! `GameConfig` holds the table rules that vary between house games. Every
//! field has a default matching the standard two-player game, so most callers
//! only touch the builder methods they need:
//!
//! ```
//! use rust_uno::core::{GameConfig, Participant};
//!
//! let config = GameConfig::default()
//!     .with_first_turn(Participant::Opponent)
//!     .with_refill_threshold(20);
//! assert_eq!(config.hand_size, 7);
//! assert_eq!(config.refill_threshold, Some(20));
//! ```

use serde::{Deserialize, Serialize};

use super::Participant;

/// Cards dealt to each hand at the start of a game.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Table rules for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each participant.
    pub hand_size: usize,

    /// Who takes the first turn.
    pub first_turn: Participant,

    /// Play a drawn card straight away when it matches the active card.
    pub auto_play_drawn: bool,

    /// Refill the draw pile at the start of a turn once it drops below this
    /// many cards. `None` refills only when a draw finds it empty.
    pub refill_threshold: Option<usize>,

    /// Turn an illegal play into the draw branch instead of rejecting it.
    pub penalize_illegal_plays: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            first_turn: Participant::Player,
            auto_play_drawn: true,
            refill_threshold: None,
            penalize_illegal_plays: false,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_first_turn(mut self, who: Participant) -> Self {
        self.first_turn = who;
        self
    }

    #[must_use]
    pub fn with_auto_play_drawn(mut self, enabled: bool) -> Self {
        self.auto_play_drawn = enabled;
        self
    }

    #[must_use]
    pub fn with_refill_threshold(mut self, threshold: usize) -> Self {
        self.refill_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_penalize_illegal_plays(mut self, enabled: bool) -> Self {
        self.penalize_illegal_plays = enabled;
        self
    }
}
