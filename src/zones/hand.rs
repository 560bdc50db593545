//! The player's hand.
//!
//! Storage keeps insertion order. What the player sees is the ordered view:
//! grouped by color in configured priority, ascending rank within a color.
//! Indices handed out to the presentation layer always refer to the ordered
//! view.
//!
//! ## Selections
//!
//! A `Selection` records the card value, its ordered-view index, and the
//! hand's revision at the time it was made. Any insertion or removal bumps the
//! revision, so a selection made before a mutation is rejected with
//! `StaleSelection` instead of silently pointing at a different card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Deck};
use crate::core::GameError;

/// Reference to one card of the ordered view at a given hand revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    index: usize,
    card: Card,
    revision: u64,
}

impl Selection {
    /// Position in the ordered view.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The selected card.
    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }
}

/// Cards held by the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    /// SmallVec sized for the default hand so a hand never allocates.
    cards: SmallVec<[Card; 8]>,
    revision: u64,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `n` cards from `deck` into a new hand.
    ///
    /// Fails without drawing anything if the deck holds fewer than `n`.
    pub fn deal(deck: &mut Deck, n: usize) -> Result<Self, GameError> {
        if deck.len() < n {
            return Err(GameError::EmptyDeck);
        }
        let mut hand = Self::new();
        for _ in 0..n {
            hand.cards.push(deck.draw_one()?);
        }
        Ok(hand)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in storage (insertion) order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards in display order. Does not touch storage.
    #[must_use]
    pub fn ordered_view(&self) -> Vec<Card> {
        let mut view = self.cards.to_vec();
        view.sort();
        view
    }

    /// Select the card at `index` of the ordered view.
    pub fn select(&self, index: usize) -> Result<Selection, GameError> {
        let view = self.ordered_view();
        let card = *view.get(index).ok_or(GameError::IndexOutOfRange {
            index,
            len: view.len(),
        })?;
        Ok(Selection {
            index,
            card,
            revision: self.revision,
        })
    }

    /// Check that `selection` still describes this hand.
    pub fn validate(&self, selection: &Selection) -> Result<(), GameError> {
        if selection.revision != self.revision {
            return Err(GameError::StaleSelection);
        }
        match self.ordered_view().get(selection.index) {
            Some(card) if *card == selection.card => Ok(()),
            _ => Err(GameError::StaleSelection),
        }
    }

    /// Remove the selected card and return it.
    pub fn remove_selected(&mut self, selection: &Selection) -> Result<Card, GameError> {
        self.validate(selection)?;
        // Equal cards are interchangeable, so any storage slot holding the
        // value will do.
        let pos = self
            .cards
            .iter()
            .position(|c| *c == selection.card)
            .ok_or(GameError::StaleSelection)?;
        let card = self.cards.remove(pos);
        self.revision += 1;
        Ok(card)
    }

    /// Add a freshly drawn card.
    pub fn insert_drawn(&mut self, card: Card) {
        self.cards.push(card);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::core::{ColorId, GameConfig};

    fn card(color: u8, rank: u8) -> Card {
        Card::new(ColorId(color), Rank::new(rank).unwrap())
    }

    fn hand_of(cards: &[Card]) -> Hand {
        let mut hand = Hand::new();
        for &c in cards {
            hand.insert_drawn(c);
        }
        hand
    }

    #[test]
    fn test_deal() {
        let config = GameConfig::standard();
        let mut deck = Deck::from_seed(&config, 42);

        let hand = Hand::deal(&mut deck, 8).unwrap();
        assert_eq!(hand.len(), 8);
        assert_eq!(deck.len(), 64);
    }

    #[test]
    fn test_deal_short_deck_draws_nothing() {
        let config = GameConfig::new(["red"]);
        let mut deck = Deck::from_seed(&config, 1);

        assert_eq!(Hand::deal(&mut deck, 13), Err(GameError::EmptyDeck));
        assert_eq!(deck.len(), 12);
    }

    #[test]
    fn test_ordered_view() {
        let hand = hand_of(&[card(2, 5), card(0, 7), card(2, 0), card(0, 3), card(1, 4)]);

        assert_eq!(
            hand.ordered_view(),
            vec![card(0, 3), card(0, 7), card(1, 4), card(2, 0), card(2, 5)]
        );
        // Storage untouched and the projection is repeatable.
        assert_eq!(hand.cards()[0], card(2, 5));
        assert_eq!(hand.ordered_view(), hand.ordered_view());
    }

    #[test]
    fn test_select_uses_ordered_index() {
        let hand = hand_of(&[card(1, 9), card(0, 2)]);

        let sel = hand.select(0).unwrap();
        assert_eq!(sel.card(), card(0, 2));
        assert_eq!(sel.index(), 0);

        assert_eq!(
            hand.select(2),
            Err(GameError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_remove_selected() {
        let mut hand = hand_of(&[card(1, 9), card(0, 2), card(0, 6)]);

        let sel = hand.select(1).unwrap();
        assert_eq!(hand.remove_selected(&sel), Ok(card(0, 6)));
        assert_eq!(hand.ordered_view(), vec![card(0, 2), card(1, 9)]);
    }

    #[test]
    fn test_selection_goes_stale_after_mutation() {
        let mut hand = hand_of(&[card(0, 4), card(1, 5)]);
        let sel = hand.select(1).unwrap();

        hand.insert_drawn(card(0, 8));
        let before = hand.clone();

        assert_eq!(hand.remove_selected(&sel), Err(GameError::StaleSelection));
        assert_eq!(hand, before);
    }

    #[test]
    fn test_selection_from_other_hand_is_stale() {
        let mut a = hand_of(&[card(0, 4), card(1, 5)]);
        let b = hand_of(&[card(0, 4), card(0, 5)]);

        let sel = b.select(1).unwrap();
        assert_eq!(a.remove_selected(&sel), Err(GameError::StaleSelection));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_duplicate_investments() {
        let mut hand = hand_of(&[card(0, 0), card(0, 0), card(0, 3)]);

        let sel = hand.select(1).unwrap();
        assert_eq!(hand.remove_selected(&sel), Ok(card(0, 0)));
        assert_eq!(hand.ordered_view(), vec![card(0, 0), card(0, 3)]);
    }
}
