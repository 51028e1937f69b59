//! Per-card effects.
//!
//! Every card resolves to exactly one `Effect`. The mapping is checked in
//! precedence order (wild draw-four, wild color-choice, draw-two,
//! skip/reverse, number) and the first match wins; the value sets are
//! disjoint, so the order only matters to readers.

use serde::{Deserialize, Serialize};

use crate::cards::Value;

/// What playing a card does beyond landing on the discard pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Effect {
    /// Other participant draws 4 and loses their turn; actor names a color.
    DrawFour,
    /// Actor names a color; turn passes normally.
    ChooseColor,
    /// Other participant draws 2 and loses their turn.
    DrawTwo,
    /// Other participant loses their turn. Reverse does the same with two
    /// participants.
    Skip,
    /// Plain number card; turn passes.
    Pass,
}

impl Effect {
    /// Resolve a card value to its effect.
    #[must_use]
    pub const fn of(value: Value) -> Self {
        match value {
            Value::WildDrawFour => Effect::DrawFour,
            Value::WildColorChoice => Effect::ChooseColor,
            Value::DrawTwo => Effect::DrawTwo,
            Value::Skip | Value::Reverse => Effect::Skip,
            Value::Number(_) => Effect::Pass,
        }
    }

    /// Cards the other participant draws.
    #[must_use]
    pub const fn penalty(self) -> usize {
        match self {
            Effect::DrawFour => 4,
            Effect::DrawTwo => 2,
            _ => 0,
        }
    }

    /// Does the actor move again (the other participant is skipped)?
    #[must_use]
    pub const fn keeps_turn(self) -> bool {
        matches!(self, Effect::DrawFour | Effect::DrawTwo | Effect::Skip)
    }

    /// Does the actor name the new active color?
    #[must_use]
    pub const fn needs_color(self) -> bool {
        matches!(self, Effect::DrawFour | Effect::ChooseColor)
    }
}
