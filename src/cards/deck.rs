//! The draw deck.
//!
//! Built once per game: for each configured color, the investment cards
//! followed by one card of each numbered rank, then shuffled. Cards only ever
//! leave the deck.

use crate::core::{GameConfig, GameError, GameRng};

use super::card::{Card, Rank};

/// Face-down draw pile. The last card is the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build and shuffle a deck for `config`.
    #[must_use]
    pub fn build(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut deck = Self::unshuffled(config);
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build and shuffle a deck from a seed.
    #[must_use]
    pub fn from_seed(config: &GameConfig, seed: u64) -> Self {
        Self::build(config, &mut GameRng::new(seed))
    }

    /// Deck in construction order.
    fn unshuffled(config: &GameConfig) -> Self {
        let mut cards = Vec::with_capacity(config.deck_size());
        for color in config.color_ids() {
            for _ in 0..config.investments_per_color {
                cards.push(Card::investment(color));
            }
            cards.extend(Rank::numbered().map(|rank| Card::new(color, rank)));
        }
        Self { cards }
    }

    /// Remove and return the top card.
    pub fn draw_one(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
