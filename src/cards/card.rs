//! Card values: colors, faces, and the combinations that make a legal card.
//!
//! A card is a plain `Copy` value. Two physical cards with the same color and
//! value are interchangeable, so `Card` itself is the structural key used by
//! hands (there is no separate string tag to keep in sync).
//!
//! ## Text form
//!
//! Cards render as `"<color> <value>"`:
//!
//! ```
//! use rust_uno::cards::{Card, Color, Value};
//!
//! let card = Card::new(Color::Blue, Value::DrawTwo).unwrap();
//! assert_eq!(card.to_string(), "blue +2");
//!
//! let parsed: Card = "wild   +4".parse().unwrap();
//! assert_eq!(parsed, Card::new(Color::Wild, Value::WildDrawFour).unwrap());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Card color. `Wild` is only ever paired with the two wild values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl Color {
    /// The four colors a wild card may name, in deck-building order.
    pub const STANDARD: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Color::Wild)
    }

    fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Wild => "wild",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "wild" => Ok(Color::Wild),
            _ => Err(CardError::Parse(s.to_string())),
        }
    }
}

/// Card face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Value {
    /// Numbered card, 0 through 9.
    Number(u8),
    DrawTwo,
    Skip,
    Reverse,
    WildDrawFour,
    WildColorChoice,
}

impl Value {
    /// Every value in the game, numbers first.
    pub const ALL: [Value; 15] = [
        Value::Number(0),
        Value::Number(1),
        Value::Number(2),
        Value::Number(3),
        Value::Number(4),
        Value::Number(5),
        Value::Number(6),
        Value::Number(7),
        Value::Number(8),
        Value::Number(9),
        Value::DrawTwo,
        Value::Skip,
        Value::Reverse,
        Value::WildDrawFour,
        Value::WildColorChoice,
    ];

    /// Is this one of the two values that go with `Color::Wild`?
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Value::WildDrawFour | Value::WildColorChoice)
    }

    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Value::Number(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::DrawTwo => f.write_str("+2"),
            Value::Skip => f.write_str("skip"),
            Value::Reverse => f.write_str("reverse"),
            Value::WildDrawFour => f.write_str("+4"),
            Value::WildColorChoice => f.write_str("new-color"),
        }
    }
}

impl FromStr for Value {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        match token.as_str() {
            "+2" | "draw-two" => Ok(Value::DrawTwo),
            "skip" => Ok(Value::Skip),
            "reverse" => Ok(Value::Reverse),
            "+4" | "wild-draw-four" => Ok(Value::WildDrawFour),
            "new-color" | "wild-color-choice" => Ok(Value::WildColorChoice),
            digit if digit.len() == 1 => digit
                .parse::<u8>()
                .map(Value::Number)
                .map_err(|_| CardError::Parse(s.to_string())),
            _ => Err(CardError::Parse(s.to_string())),
        }
    }
}

/// An immutable card.
///
/// Construct with [`Card::new`], which rejects combinations that do not
/// exist in the deck (a wild value on a standard color, a number on wild,
/// or a number above 9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    color: Color,
    value: Value,
}

/// Unvalidated wire form of a card.
#[derive(Deserialize)]
struct RawCard {
    color: Color,
    value: Value,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.color, raw.value)
    }
}

impl Card {
    /// Create a card, validating the color/value pairing.
    pub fn new(color: Color, value: Value) -> Result<Self, CardError> {
        if Self::is_valid_combination(color, value) {
            Ok(Self { color, value })
        } else {
            Err(CardError::InvalidCard { color, value })
        }
    }

    /// Deck-builder constructor; callers guarantee a valid pairing.
    pub(crate) const fn new_unchecked(color: Color, value: Value) -> Self {
        Self { color, value }
    }

    #[must_use]
    pub const fn is_valid_combination(color: Color, value: Value) -> bool {
        match value {
            Value::Number(n) => n <= 9 && !color.is_wild(),
            Value::DrawTwo | Value::Skip | Value::Reverse => !color.is_wild(),
            Value::WildDrawFour | Value::WildColorChoice => color.is_wild(),
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.color.is_wild()
    }

    /// Display key for this card, always recomputed from color and value.
    #[must_use]
    pub fn tag(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(color), Some(value), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(CardError::Parse(s.to_string()));
        };
        let color = color.parse::<Color>().map_err(|_| CardError::Parse(s.to_string()))?;
        let value = value.parse::<Value>().map_err(|_| CardError::Parse(s.to_string()))?;
        Card::new(color, value)
    }
}
