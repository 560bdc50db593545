//! Cards and the draw deck.
//!
//! - `Card`: immutable (color, rank) value
//! - `Rank`: 0 for investments, 2..=10 otherwise
//! - `Deck`: shuffled draw pile

pub mod card;
pub mod deck;

pub use card::{Card, Rank};
pub use deck::Deck;
