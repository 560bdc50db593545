//! Expedition piles, one per configured color.
//!
//! ## Legality
//!
//! A play is judged against the top card of the target pile only:
//!
//! | top            | candidate      | legal?                     |
//! |----------------|----------------|----------------------------|
//! | (empty pile)   | anything       | yes                        |
//! | any            | investment     | only if top is investment  |
//! | investment     | numbered       | yes                        |
//! | numbered       | numbered       | `candidate >= top`         |
//!
//! `PileOrder::StrictlyAscending` tightens the last row to `>`.

use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::core::{ColorId, GameConfig, GameError, PileOrder};

/// Whether `candidate` may be placed on `pile` (bottom first, top last).
///
/// Equal consecutive ranks are accepted.
#[must_use]
pub fn is_valid_play(pile: &[Card], candidate: Card) -> bool {
    PileOrder::NonDecreasing.permits(pile, candidate)
}

impl PileOrder {
    /// Apply this ordering rule to a pile.
    #[must_use]
    pub fn permits(self, pile: &[Card], candidate: Card) -> bool {
        let Some(top) = pile.last() else {
            return true;
        };
        if candidate.is_investment() {
            return top.is_investment();
        }
        if top.is_investment() {
            return true;
        }
        match self {
            PileOrder::NonDecreasing => candidate.rank >= top.rank,
            PileOrder::StrictlyAscending => candidate.rank > top.rank,
        }
    }
}

/// All expedition piles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpeditionBoard {
    piles: FxHashMap<ColorId, Vec<Card>>,
    order: PileOrder,
}

impl ExpeditionBoard {
    /// One empty pile per configured color.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            piles: config.color_ids().map(|c| (c, Vec::new())).collect(),
            order: config.pile_order,
        }
    }

    /// Check a play without performing it.
    pub fn check(&self, color: ColorId, card: Card) -> Result<(), GameError> {
        let pile = match self.piles.get(&color) {
            Some(pile) if card.color == color => pile,
            _ => return Err(GameError::WrongPile { pile: color, card }),
        };
        if self.order.permits(pile, card) {
            Ok(())
        } else {
            // `permits` only rejects when there is a top card.
            let top = pile.last().copied().unwrap_or(card);
            Err(GameError::IllegalMove { card, top })
        }
    }

    /// Place `card` on the `color` pile. Returns the new pile size.
    pub fn push(&mut self, color: ColorId, card: Card) -> Result<usize, GameError> {
        self.check(color, card)?;
        let pile = self
            .piles
            .get_mut(&color)
            .ok_or(GameError::WrongPile { pile: color, card })?;
        pile.push(card);
        Ok(pile.len())
    }

    /// Top card of a pile, `None` if empty or not configured.
    #[must_use]
    pub fn top_of(&self, color: ColorId) -> Option<Card> {
        self.piles.get(&color)?.last().copied()
    }

    /// Full pile, bottom first.
    #[must_use]
    pub fn pile(&self, color: ColorId) -> &[Card] {
        self.piles.get(&color).map_or(&[], |p| p.as_slice())
    }

    #[must_use]
    pub fn pile_len(&self, color: ColorId) -> usize {
        self.pile(color).len()
    }

    /// Cards on all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.values().map(Vec::len).sum()
    }

    /// Progression rule in force.
    #[must_use]
    pub fn order(&self) -> PileOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    const RED: ColorId = ColorId(0);
    const GREEN: ColorId = ColorId(1);

    fn red(rank: u8) -> Card {
        Card::new(RED, Rank::new(rank).unwrap())
    }

    #[test]
    fn test_legality_table() {
        assert!(is_valid_play(&[], red(0)));
        assert!(is_valid_play(&[], red(9)));
        assert!(!is_valid_play(&[red(5)], red(3)));
        assert!(is_valid_play(&[red(5)], red(5)));
        assert!(is_valid_play(&[red(5)], red(6)));
        assert!(is_valid_play(&[red(0)], red(0)));
        assert!(is_valid_play(&[red(0)], red(7)));
        assert!(!is_valid_play(&[red(7)], red(0)));
        assert!(is_valid_play(&[red(0), red(0), red(2)], red(2)));
    }

    #[test]
    fn test_only_top_card_matters() {
        assert!(is_valid_play(&[red(9), red(0)], red(3)));
    }

    #[test]
    fn test_strictly_ascending() {
        let strict = PileOrder::StrictlyAscending;
        assert!(!strict.permits(&[red(5)], red(5)));
        assert!(strict.permits(&[red(5)], red(6)));
        assert!(strict.permits(&[red(0)], red(0)));
        assert!(strict.permits(&[red(0)], red(2)));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = ExpeditionBoard::new(&GameConfig::standard());
        for color in GameConfig::standard().color_ids() {
            assert_eq!(board.top_of(color), None);
            assert_eq!(board.pile_len(color), 0);
        }
        assert_eq!(board.total_cards(), 0);
    }

    #[test]
    fn test_push_and_top() {
        let mut board = ExpeditionBoard::new(&GameConfig::new(["red", "green"]));

        assert_eq!(board.push(RED, red(0)), Ok(1));
        assert_eq!(board.push(RED, red(4)), Ok(2));
        assert_eq!(board.top_of(RED), Some(red(4)));
        assert_eq!(board.pile(RED), &[red(0), red(4)]);
        assert_eq!(board.top_of(GREEN), None);
    }

    #[test]
    fn test_push_wrong_pile() {
        let mut board = ExpeditionBoard::new(&GameConfig::new(["red", "green"]));

        assert_eq!(
            board.push(GREEN, red(4)),
            Err(GameError::WrongPile { pile: GREEN, card: red(4) })
        );
        assert_eq!(board.total_cards(), 0);
    }

    #[test]
    fn test_push_unconfigured_color() {
        let mut board = ExpeditionBoard::new(&GameConfig::new(["red"]));
        let blue = Card::new(ColorId(7), Rank::new(3).unwrap());

        assert!(matches!(
            board.push(ColorId(7), blue),
            Err(GameError::WrongPile { .. })
        ));
    }

    #[test]
    fn test_push_illegal_leaves_pile() {
        let mut board = ExpeditionBoard::new(&GameConfig::new(["red"]));
        board.push(RED, red(6)).unwrap();

        assert_eq!(
            board.push(RED, red(3)),
            Err(GameError::IllegalMove { card: red(3), top: red(6) })
        );
        assert_eq!(board.pile(RED), &[red(6)]);
    }

    #[test]
    fn test_board_uses_configured_order() {
        let config = GameConfig::new(["red"]).with_pile_order(PileOrder::StrictlyAscending);
        let mut board = ExpeditionBoard::new(&config);
        board.push(RED, red(6)).unwrap();

        assert_eq!(board.order(), PileOrder::StrictlyAscending);
        assert!(board.push(RED, red(6)).is_err());
    }
}
