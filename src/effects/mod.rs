//! Card effect dispatch.
//!
//! `Effect::of` maps each card value to one mutually exclusive effect. The
//! turn engine applies it: penalty draws, skipped turns, and color choice.

mod effect;

pub use effect::Effect;
