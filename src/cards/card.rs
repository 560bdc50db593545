//! Card value type.
//!
//! A card is just a color and a rank. Cards carry no identity: two
//! investment cards of the same color are interchangeable, and equality is
//! by value.

use serde::{Deserialize, Serialize};

use crate::core::config::{MAX_RANK, MIN_RANK};
use crate::core::ColorId;

/// Card rank: 0 for an investment card, otherwise 2..=10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// The investment rank.
    pub const INVESTMENT: Rank = Rank(0);

    /// Create a rank, rejecting values no card carries.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value == 0 || (value >= MIN_RANK && value <= MAX_RANK) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numbered ranks in ascending order.
    pub fn numbered() -> impl Iterator<Item = Rank> {
        (MIN_RANK..=MAX_RANK).map(Rank)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_investment(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("invalid card rank {value}"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_investment() {
            write!(f, "investment")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A single card.
///
/// The derived ordering (color, then rank) is the hand's display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: ColorId,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(color: ColorId, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// An investment card of the given color.
    #[must_use]
    pub const fn investment(color: ColorId) -> Self {
        Self::new(color, Rank::INVESTMENT)
    }

    #[must_use]
    pub const fn is_investment(&self) -> bool {
        self.rank.is_investment()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}
